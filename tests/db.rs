mod common;

#[test]
fn test_creates_and_migrates_db_file() {
    let test_db = common::TestDb::new("test_db_file.db");
    let conn = test_db.pool().get();
    assert!(conn.is_ok());
}
