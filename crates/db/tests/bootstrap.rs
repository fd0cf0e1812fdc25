use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    // Health check
    watchlist_db::health_check(&pool).await.unwrap();

    // Both tables exist and start empty.
    for table in ["lists", "list_items"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// The cascade constraint is present on list_items.list_id.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cascade_constraint_exists(pool: PgPool) {
    let delete_rule: (String,) = sqlx::query_as(
        "SELECT rc.delete_rule \
         FROM information_schema.referential_constraints rc \
         JOIN information_schema.table_constraints tc \
           ON rc.constraint_name = tc.constraint_name \
         WHERE tc.table_name = 'list_items'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(delete_rule.0, "CASCADE");
}
