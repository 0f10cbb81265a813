//! Demo data for SQLite databases listed in the server configuration

use sqlx::sqlite::SqlitePool;

/// Create the demo forum schema and fill it once
pub async fn seed_demo_forum(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS members (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT UNIQUE NOT NULL,
            joined_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            signature TEXT,
            avatar BLOB
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS threads (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            author_id INTEGER REFERENCES members(id),
            title TEXT NOT NULL,
            pinned BOOLEAN DEFAULT false,
            views INTEGER DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            thread_id INTEGER REFERENCES threads(id),
            author_id INTEGER REFERENCES members(id),
            body TEXT NOT NULL,
            score REAL,
            posted_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Left empty on purpose to show the empty-table page
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS moderation_log (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            post_id INTEGER REFERENCES posts(id),
            action TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    let member_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM members")
        .fetch_one(pool)
        .await?;
    if member_count > 0 {
        return Ok(());
    }

    let handles = [
        "amber", "basil", "cedar", "dune", "ember", "fjord", "garnet", "heath", "iris", "juniper",
        "kestrel", "lumen", "moss", "nimbus", "onyx", "pike", "quartz", "rowan", "sable", "tansy",
        "umber", "vale", "wren", "yarrow", "zephyr",
    ];

    for (index, handle) in handles.iter().enumerate() {
        let signature = (index % 3 != 0).then(|| format!("-- {} was here", handle));
        let avatar = (index % 4 == 0).then(|| vec![0x89_u8, b'P', b'N', b'G', index as u8]);
        sqlx::query("INSERT INTO members (username, signature, avatar) VALUES (?, ?, ?)")
            .bind(*handle)
            .bind(signature)
            .bind(avatar)
            .execute(pool)
            .await?;
    }

    let topics = [
        "Welcome thread", "Rules and FAQ", "Show your setup", "Build log", "Help wanted",
        "Off topic", "Release notes", "Meetups", "Bug reports", "Feature ideas",
    ];

    for index in 0..60_usize {
        let topic = topics[index % topics.len()];
        sqlx::query("INSERT INTO threads (author_id, title, pinned, views) VALUES (?, ?, ?, ?)")
            .bind((index % handles.len()) as i64 + 1)
            .bind(format!("{} #{}", topic, index + 1))
            .bind(index < 2)
            .bind((index * 37 % 1000) as i64)
            .execute(pool)
            .await?;
    }

    for index in 0..500_usize {
        let score = (index % 5 != 0).then(|| (index % 11) as f64 * 0.5);
        sqlx::query("INSERT INTO posts (thread_id, author_id, body, score) VALUES (?, ?, ?, ?)")
            .bind((index % 60) as i64 + 1)
            .bind((index * 7 % handles.len()) as i64 + 1)
            .bind(format!("Post number {} in the demo forum", index + 1))
            .bind(score)
            .execute(pool)
            .await?;
    }

    tracing::info!(
        members = handles.len(),
        threads = 60,
        posts = 500,
        "demo forum seeded"
    );
    Ok(())
}
