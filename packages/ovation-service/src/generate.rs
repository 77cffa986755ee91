use crate::ReviewService;

/// The three text fields attached to every stored review. All fields are
/// guaranteed non-empty whether they came from the provider or from the
/// deterministic fallback templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedContent {
	pub user_response: String,
	pub summary: String,
	pub recommended_actions: String,
}

const SUMMARY_SNIPPET_CHARS: usize = 100;

const FALLBACK_USER_RESPONSE: &str = "Thank you for your feedback! We truly appreciate you \
	taking the time to share your experience with us.";
const FALLBACK_ACTIONS_POSITIVE: &str = "• Celebrate positive feedback\n• Share with the team\n\
	• Consider featuring this in testimonials";
const FALLBACK_ACTIONS_NEGATIVE: &str = "• Review the feedback in detail\n• Follow up with the \
	user if possible\n• Identify and track improvement actions";

// Last-resort defaults for a successful call that returned blank text for one
// field. Deliberately distinct from the fallback templates above.
const DEFAULT_USER_RESPONSE: &str =
	"Thank you for your feedback! We appreciate you sharing your experience.";
const DEFAULT_ACTIONS: &str = "• Review feedback\n• Share with the team\n• Plan concrete \
	improvements";

impl ReviewService {
	/// Produces the three generated fields for a submission. Never fails
	/// outward: every provider error resolves to the fallback templates.
	pub async fn generate(&self, rating: u8, review: &str) -> GeneratedContent {
		let cfg = &self.cfg.provider.generation;
		let Some(api_key) = cfg.api_key.as_deref() else {
			return fallback_content(rating, review);
		};

		let user_prompt = user_response_prompt(rating, review);
		let summary_prompt = summary_prompt(rating, review);
		let actions_prompt = actions_prompt(rating, review);
		let user_response = self.providers.generation.complete(cfg, api_key, &user_prompt);
		let summary = self.providers.generation.complete(cfg, api_key, &summary_prompt);
		let actions = self.providers.generation.complete(cfg, api_key, &actions_prompt);

		// All-or-nothing: one failed call discards the other replies too.
		match tokio::try_join!(user_response, summary, actions) {
			Ok((user_response, summary, actions)) => GeneratedContent {
				user_response: non_empty_or(user_response, DEFAULT_USER_RESPONSE),
				summary: non_empty_or(summary, &fallback_summary(rating, review)),
				recommended_actions: non_empty_or(actions, DEFAULT_ACTIONS),
			},
			Err(err) => {
				tracing::warn!("Generation provider failed, using fallback content: {err}");

				fallback_content(rating, review)
			},
		}
	}
}

/// Deterministic, network-free content used when no API key is configured or
/// when the provider fails.
pub fn fallback_content(rating: u8, review: &str) -> GeneratedContent {
	GeneratedContent {
		user_response: FALLBACK_USER_RESPONSE.to_string(),
		summary: fallback_summary(rating, review),
		recommended_actions: fallback_actions(rating).to_string(),
	}
}

fn fallback_summary(rating: u8, review: &str) -> String {
	if review.is_empty() {
		format!("{rating}-star review without written feedback.")
	} else {
		format!("{rating}-star review: {}...", snippet(review, SUMMARY_SNIPPET_CHARS))
	}
}

fn fallback_actions(rating: u8) -> &'static str {
	if rating >= 4 { FALLBACK_ACTIONS_POSITIVE } else { FALLBACK_ACTIONS_NEGATIVE }
}

fn non_empty_or(value: String, default: &str) -> String {
	if value.trim().is_empty() { default.to_string() } else { value }
}

fn snippet(text: &str, max_chars: usize) -> &str {
	match text.char_indices().nth(max_chars) {
		Some((index, _)) => &text[..index],
		None => text,
	}
}

fn user_response_prompt(rating: u8, review: &str) -> String {
	let submitted = if review.is_empty() {
		format!("A user submitted a {rating}-star review without written feedback.")
	} else {
		format!("A user submitted a {rating}-star review: \"{review}\".")
	};

	format!(
		"{submitted}\n\
		Write a brief, warm, professional response (2\u{2013}3 sentences) that:\n\
		- Thanks them for their feedback\n\
		- Acknowledges their rating\n\
		- Shows appreciation and openness to improvement.\n\
		Respond as the business speaking to the customer."
	)
}

fn summary_prompt(rating: u8, review: &str) -> String {
	if review.is_empty() {
		format!("Summarize a {rating}-star review where the user did not leave written feedback.")
	} else {
		format!(
			"Summarize this {rating}-star review in 1\u{2013}2 concise sentences. \
			Review text: \"{review}\""
		)
	}
}

fn actions_prompt(rating: u8, review: &str) -> String {
	let context = if review.is_empty() {
		format!("Based on this {rating}-star review (no written feedback)")
	} else {
		format!("Based on this {rating}-star review: \"{review}\"")
	};

	format!(
		"{context}\n\
		suggest 2\u{2013}3 specific, actionable next steps for the business.\n\
		Return them as a short bulleted list."
	)
}
