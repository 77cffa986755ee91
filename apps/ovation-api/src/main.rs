use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = ovation_api::Args::parse();
	ovation_api::run(args).await
}
