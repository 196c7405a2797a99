//! Demo content for a fresh store.

use tracing::info;

use crate::database::Db;
use crate::errors::Result;
use crate::models::{NewQuote, NewSuggestion, NewUser};

/// Fills an empty store with a handful of users, tweets, favorites, suggestions
/// and trends. Does nothing once any user exists.
pub async fn populate(db: &Db) -> Result<()> {
    if db.has_user(|_| true).await {
        info!("store already has users; skipping demo data");
        return Ok(());
    }

    let ada = db
        .create_user(NewUser {
            name: "Ada Lovelace".into(),
            handle: "ada".into(),
            avatar_url: "https://i.pravatar.cc/150?u=ada".into(),
            cover_url: "https://picsum.photos/seed/ada/600/200".into(),
        })
        .await?;
    let grace = db
        .create_user(NewUser {
            name: "Grace Hopper".into(),
            handle: "grace".into(),
            avatar_url: "https://i.pravatar.cc/150?u=grace".into(),
            cover_url: "https://picsum.photos/seed/grace/600/200".into(),
        })
        .await?;

    db.create_tweet(&grace.id, "It's easier to ask forgiveness than it is to get permission.")
        .await?;
    let engine = db
        .create_tweet(&ada.id, "The Analytical Engine weaves algebraic patterns.")
        .await?;
    db.create_tweet(&ada.id, "Imagination is the discovering faculty, pre-eminently.")
        .await?;
    db.create_favorite(&grace.id, &engine.id).await?;

    db.create_suggestion(NewSuggestion {
        name: "Alan Turing".into(),
        handle: "alan".into(),
        avatar_url: "https://i.pravatar.cc/150?u=alan".into(),
        reason: "Followed by Ada Lovelace".into(),
    })
    .await?;
    db.create_suggestion(NewSuggestion {
        name: "Katherine Johnson".into(),
        handle: "katherine".into(),
        avatar_url: "https://i.pravatar.cc/150?u=katherine".into(),
        reason: "Popular in your network".into(),
    })
    .await?;

    db.create_hashtag_trend("rustlang", 1_200).await?;
    db.create_hashtag_trend("graphql", 430).await?;
    db.create_topic_trend(
        "Computing history",
        860,
        Some(NewQuote {
            title: "The first program".into(),
            description: "Note G describes an algorithm for Bernoulli numbers.".into(),
            image_url: "https://picsum.photos/seed/noteg/300/200".into(),
        }),
    )
    .await?;
    db.create_topic_trend("Compilers", 95, None).await?;

    info!(path = %db.path().display(), "seeded demo data");
    Ok(())
}
