use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

mod config;
mod manager;
mod schema;
mod seed;

use config::DbConfig;
use manager::friend_manager::FriendManager;
use manager::user_manager::UserManager;
use manager::FriendStatus;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    dotenvy::dotenv().context("loading .env file")?;
    let cfg = DbConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&cfg.dsn())
        .await
        .context("connecting to postgres")?;
    tracing::info!("connected to database {}", cfg.dbname);

    schema::create_tables(&pool)
        .await
        .context("creating schema")?;
    tracing::info!("schema created");

    let initiator_id = seed::seed_sample_data(&pool)
        .await
        .context("seeding sample data")?;
    tracing::info!("sample data seeded");

    let users = UserManager::new(&pool).get_all_users().await?;
    println!("{} users:", users.len());
    for user in &users {
        println!(
            "  {} {} <{}>",
            user.first_name,
            user.last_name.as_deref().unwrap_or(""),
            user.email
        );
    }

    let friend_manager = FriendManager::new(&pool);
    let dtos = friend_manager.get_friends_for_user(initiator_id).await?;
    let friends = friend_manager.resolve_friends(&dtos).await?;
    println!("{} friendships:", friends.len());
    for friend in &friends {
        println!(
            "  {} -> {}: {}",
            friend.initiator_user.first_name,
            friend.second_user.first_name,
            FriendStatus::from(friend.status)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::user_manager;

    async fn fresh_pool() -> sqlx::PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await
            .expect("connecting to postgres");

        // Earlier runs leave the demo tables behind; start empty.
        sqlx::query("DROP TABLE IF EXISTS messages, chat_members, chats, friends, users")
            .execute(&pool)
            .await
            .expect("dropping leftover tables");

        pool
    }

    // Run with: DATABASE_URL=postgres://... cargo test -- --ignored
    #[tokio::test]
    #[ignore = "requires database"]
    async fn end_to_end_demo_flow() {
        let pool = fresh_pool().await;

        schema::create_tables(&pool).await.expect("creating schema");
        let jason_id = seed::seed_sample_data(&pool).await.expect("seeding");

        // Every seeded row comes back with its fields intact.
        let users = UserManager::new(&pool).get_all_users().await.unwrap();
        assert_eq!(users.len(), 6);
        let jason = users.iter().find(|u| u.id == jason_id).unwrap();
        assert_eq!(jason.first_name, "Jason");
        assert_eq!(jason.last_name.as_deref(), Some("Moiron"));
        assert_eq!(jason.email, "jmoiron@jmoiron.net");
        assert!(jason.birth_date.is_some());

        let by_id = UserManager::new(&pool).get_user_by_id(jason_id).await.unwrap();
        assert_eq!(by_id.email, jason.email);

        assert!(matches!(
            UserManager::new(&pool).get_user_by_id(i32::MAX).await,
            Err(user_manager::Error::NotFound)
        ));

        let friend_manager = FriendManager::new(&pool);
        let dtos = friend_manager.get_friends_for_user(jason_id).await.unwrap();
        assert_eq!(dtos.len(), 1);
        assert_eq!(dtos[0].initiator_user_id, jason_id);
        assert_eq!(dtos[0].status, 1);

        // The second party sees the same row from their side.
        let johns_view = friend_manager
            .get_friends_for_user(dtos[0].second_user_id)
            .await
            .unwrap();
        assert_eq!(johns_view.len(), 1);
        assert_eq!(johns_view[0].id, dtos[0].id);

        // A user with no friendships gets an empty list, not an error.
        let zuck = users.iter().find(|u| u.first_name == "Zuck").unwrap();
        assert!(friend_manager
            .get_friends_for_user(zuck.id)
            .await
            .unwrap()
            .is_empty());

        let resolved = friend_manager.resolve_friends(&dtos).await.unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].initiator_user.first_name, "Jason");
        assert_eq!(resolved[0].second_user.first_name, "John");
        assert_eq!(FriendStatus::from(resolved[0].status), FriendStatus::Pending);
        assert_eq!(FriendStatus::from(resolved[0].status).to_string(), "pending");

        // Both retrieval paths agree.
        let joined = friend_manager.get_all_friends(jason_id).await.unwrap();
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].id, resolved[0].id);
        assert_eq!(joined[0].initiator_user.id, resolved[0].initiator_user.id);
        assert_eq!(joined[0].second_user.email, resolved[0].second_user.email);
        assert_eq!(joined[0].status, resolved[0].status);

        // Bootstrap is not idempotent: the tables already exist now.
        assert!(schema::create_tables(&pool).await.is_err());
    }
}
