use ovation_storage::{db::Db, models::NewReview, queries};
use ovation_testkit::TestDatabase;

async fn connect(test_db: &TestDatabase) -> Db {
	let db = Db::connect(&test_db.sqlite(2)).await.expect("Failed to connect test database.");

	db.ensure_schema().await.expect("Failed to apply schema.");

	db
}

fn new_review(rating: i64, review: &'static str) -> NewReview<'static> {
	NewReview {
		rating,
		review,
		ai_response: "Thank you!",
		ai_summary: "A review.",
		ai_recommended_actions: "• Follow up",
	}
}

#[tokio::test]
async fn ensure_schema_is_idempotent() {
	let test_db = TestDatabase::new();
	let db = connect(&test_db).await;

	db.ensure_schema().await.expect("Second ensure_schema must succeed.");

	test_db.cleanup().expect("Failed to cleanup test database.");
}

#[tokio::test]
async fn inserts_assign_monotonic_ids_and_timestamps() {
	let test_db = TestDatabase::new();
	let db = connect(&test_db).await;

	let first = queries::insert_review(&db, &new_review(5, "great")).await.expect("insert failed");
	let second = queries::insert_review(&db, &new_review(3, "")).await.expect("insert failed");

	assert!(second.id > first.id);
	assert!(second.created_at >= first.created_at);
	assert_eq!(first.rating, 5);
	assert_eq!(first.review, "great");

	test_db.cleanup().expect("Failed to cleanup test database.");
}

#[tokio::test]
async fn listing_orders_by_created_at_then_id_descending() {
	let test_db = TestDatabase::new();
	let db = connect(&test_db).await;

	// Insert rows with one identical past timestamp directly so the id
	// tie-break is actually exercised.
	let stamp = "2020-01-02T03:04:05.000000Z";
	for rating in [1_i64, 2, 3] {
		sqlx::query(
			"\
INSERT INTO reviews (rating, review, ai_response, ai_summary, ai_recommended_actions, created_at)
VALUES (?, '', 'r', 's', 'a', ?)",
		)
		.bind(rating)
		.bind(stamp)
		.execute(&db.pool)
		.await
		.expect("raw insert failed");
	}
	let newest = queries::insert_review(&db, &new_review(4, "newest by time"))
		.await
		.expect("insert failed");

	let rows = queries::list_reviews(&db).await.expect("list failed");
	let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();

	assert_eq!(rows.len(), 4);
	assert_eq!(ids[0], newest.id);
	assert_eq!(&ids[1..], &[3, 2, 1]);

	test_db.cleanup().expect("Failed to cleanup test database.");
}

#[tokio::test]
async fn stats_queries_group_and_average() {
	let test_db = TestDatabase::new();
	let db = connect(&test_db).await;

	for rating in [5_i64, 5, 3, 1] {
		queries::insert_review(&db, &new_review(rating, "")).await.expect("insert failed");
	}

	let total = queries::count_reviews(&db).await.expect("count failed");
	let by_rating = queries::count_by_rating(&db).await.expect("group failed");
	let avg = queries::average_rating(&db).await.expect("avg failed");

	assert_eq!(total, 4);
	assert_eq!(
		by_rating.iter().map(|entry| (entry.rating, entry.count)).collect::<Vec<_>>(),
		vec![(1, 1), (3, 1), (5, 2)]
	);
	assert_eq!(avg, Some(3.5));

	test_db.cleanup().expect("Failed to cleanup test database.");
}

#[tokio::test]
async fn empty_store_has_no_average() {
	let test_db = TestDatabase::new();
	let db = connect(&test_db).await;

	assert_eq!(queries::count_reviews(&db).await.expect("count failed"), 0);
	assert!(queries::count_by_rating(&db).await.expect("group failed").is_empty());
	assert_eq!(queries::average_rating(&db).await.expect("avg failed"), None);

	test_db.cleanup().expect("Failed to cleanup test database.");
}
