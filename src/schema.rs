use sqlx::{Executor, PgPool};

/// The demo schema, executed as one multi-statement block. There is no
/// `IF NOT EXISTS`: running it against a database that already has the
/// tables fails, and callers are expected to start from an empty database.
pub const SCHEMA: &str = r#"CREATE TABLE users (
    id serial PRIMARY KEY,
    first_name varchar(50) NOT NULL,
    last_name varchar(50),
    email varchar(50) NOT NULL,
    birth_date timestamp,
    created_at timestamp NOT NULL,
    updated_at timestamp NOT NULL
);

CREATE TABLE friends (
    id serial PRIMARY KEY,
    initiator_user_id int REFERENCES users(id) NOT NULL,
    second_user_id int REFERENCES users(id) NOT NULL,
    status integer NOT NULL,
    created_at timestamp NOT NULL,
    updated_at timestamp NOT NULL
);

CREATE TABLE chats (
    id serial PRIMARY KEY,
    user_owner_id int REFERENCES users(id) NOT NULL,
    status boolean NOT NULL,
    created_at timestamp NOT NULL,
    updated_at timestamp NOT NULL
);

CREATE TABLE chat_members (
    id serial PRIMARY KEY,
    chat_id int REFERENCES chats(id) NOT NULL,
    user_id int REFERENCES users(id) NOT NULL,
    join_date date NOT NULL,
    status varchar(10) NOT NULL,
    UNIQUE (chat_id, user_id)
);

CREATE TABLE messages (
    id serial PRIMARY KEY,
    created_at timestamp NOT NULL,
    chat_id int REFERENCES chats(id) NOT NULL,
    user_id int REFERENCES users(id) NOT NULL,
    message_content_link varchar,
    preview varchar
)"#;

pub async fn create_tables(pool: &PgPool) -> Result<(), sqlx::Error> {
    // Plain-text execute runs the whole block over the simple query
    // protocol; a prepared statement would reject multiple commands.
    pool.execute(SCHEMA).await?;
    Ok(())
}
