mod common;

#[test]
fn test_creates_database_with_schema() {
    let test_db = common::TestDb::new("test_creates_database_with_schema.db");
    let conn = test_db.pool().get();
    assert!(conn.is_ok());
}
