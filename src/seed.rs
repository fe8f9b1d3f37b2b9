use chrono::Utc;
use sqlx::PgPool;

const INSERT_USER: &str = "INSERT INTO users \
    (first_name, last_name, email, birth_date, created_at, updated_at) \
    VALUES ($1, $2, $3, $4, $5, $6)";

const INSERT_USER_RETURNING: &str = "INSERT INTO users \
    (first_name, last_name, email, birth_date, created_at, updated_at) \
    VALUES ($1, $2, $3, $4, $5, $6) RETURNING id";

/// Inserts the demo users plus one pending friendship between the first two,
/// all in a single transaction. Returns the initiator's id so the caller can
/// list their friendships. Dropping the transaction on an early return rolls
/// everything back; the demo then terminates.
pub async fn seed_sample_data(pool: &PgPool) -> Result<i32, sqlx::Error> {
    let now = Utc::now().naive_utc();
    let mut tx = pool.begin().await?;

    let (jason_id,): (i32,) = sqlx::query_as(INSERT_USER_RETURNING)
        .bind("Jason")
        .bind("Moiron")
        .bind("jmoiron@jmoiron.net")
        .bind(now)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

    let (john_id,): (i32,) = sqlx::query_as(INSERT_USER_RETURNING)
        .bind("John")
        .bind("Doe")
        .bind("johndoeDNE@gmail.net")
        .bind(now)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

    for (first_name, last_name, email) in [
        ("Ivan", "Shishman", "ivsh@sh.c"),
        ("Grozdan", "Cvetkov", "g.cvetkov@pete.bg"),
        ("Zuck", "ZeCuck", "zuki@fb.net"),
        ("Richard", "Brandson", "fendde@xyz.xyz"),
    ] {
        sqlx::query(INSERT_USER)
            .bind(first_name)
            .bind(last_name)
            .bind(email)
            .bind(now)
            .bind(now)
            .bind(now)
            .execute(&mut *tx)
            .await?;
    }

    sqlx::query(
        "INSERT INTO friends (initiator_user_id, second_user_id, status, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(jason_id)
    .bind(john_id)
    .bind(1) // pending
    .bind(now)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(jason_id)
}
