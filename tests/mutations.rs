mod common;

use common::*;
use serde_json::{json, Value};

const CREATE_TWEET: &str = r#"
    mutation Create($userId: String!, $body: String!) {
        createTweet(userId: $userId, body: $body) {
            id
            body
            author { id handle }
            stats { favoriteCount }
        }
    }
"#;

fn fixture() -> Value {
    json!({
        "users": [user("u1", "ada")],
        "tweets": [tweet("t1", "u1", T0), tweet("t2", "u1", T1)]
    })
}

#[test]
fn created_tweet_leads_the_timeline() {
    let (_dir, client) = client_with(Some(fixture()));

    let created = graphql(&client, CREATE_TWEET, json!({ "userId": "u1", "body": "hello" }));
    assert!(created.get("errors").is_none(), "{created}");
    let tweet = &created["data"]["createTweet"];
    assert_eq!(tweet["body"], "hello");
    assert_eq!(tweet["author"], json!({ "id": "u1", "handle": "ada" }));
    assert_eq!(tweet["stats"]["favoriteCount"], 0);
    let id = tweet["id"].as_str().unwrap();
    assert!(id.starts_with("tweet-"));

    let timeline = graphql(&client, "{ tweets { id body } }", json!({}));
    let tweets = timeline["data"]["tweets"].as_array().unwrap();
    assert_eq!(tweets.len(), 3);
    assert_eq!(tweets[0], json!({ "id": id, "body": "hello" }));
}

#[test]
fn created_tweet_is_persisted() {
    let (dir, client) = client_with(Some(fixture()));
    graphql(&client, CREATE_TWEET, json!({ "userId": "u1", "body": "on disk" }));

    let doc: Value =
        serde_json::from_slice(&std::fs::read(dir.path().join("db.json")).unwrap()).unwrap();
    let stored = doc["tweets"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(stored["message"], "on disk");
    assert_eq!(stored["userId"], "u1");
    assert!(stored.get("body").is_none());
}

#[test]
fn tweet_for_an_unknown_user_is_rejected() {
    let (_dir, client) = client_with(Some(fixture()));

    let response = graphql(&client, CREATE_TWEET, json!({ "userId": "ghost", "body": "boo" }));
    assert_eq!(error_codes(&response), ["NOT_FOUND"]);
    assert_eq!(response["errors"][0]["message"], "User ghost does not exist");

    let timeline = graphql(&client, "{ tweets { id } }", json!({}));
    assert_eq!(timeline["data"]["tweets"].as_array().unwrap().len(), 2);
}

#[test]
fn empty_tweet_is_bad_input() {
    let (_dir, client) = client_with(Some(fixture()));

    let response = graphql(&client, CREATE_TWEET, json!({ "userId": "u1", "body": "" }));
    assert_eq!(error_codes(&response), ["BAD_USER_INPUT"]);
}

#[test]
fn favorite_lifecycle() {
    let (_dir, client) = client_with(Some(fixture()));
    let vars = json!({ "userId": "u1", "tweetId": "t1" });

    let created = graphql(
        &client,
        r#"mutation Fav($userId: String!, $tweetId: String!) {
            createFavorite(userId: $userId, tweetId: $tweetId) {
                id
                user { handle }
                tweet { id author { handle } stats { favoriteCount } favorited }
            }
        }"#,
        vars.clone(),
    );
    assert!(created.get("errors").is_none(), "{created}");
    let favorite = &created["data"]["createFavorite"];
    assert!(favorite["id"].as_str().unwrap().starts_with("favorite-"));
    assert_eq!(favorite["user"]["handle"], "ada");
    assert_eq!(
        favorite["tweet"],
        json!({
            "id": "t1",
            "author": { "handle": "ada" },
            "stats": { "favoriteCount": 1 },
            "favorited": true
        })
    );

    let profile = graphql(
        &client,
        "{ currentUser { favorites { tweet { id author { handle } } } } }",
        json!({}),
    );
    assert!(profile.get("errors").is_none(), "{profile}");
    assert_eq!(
        profile["data"]["currentUser"]["favorites"],
        json!([{ "tweet": { "id": "t1", "author": { "handle": "ada" } } }])
    );

    let delete = r#"mutation Unfav($userId: String!, $tweetId: String!) {
        deleteFavorite(userId: $userId, tweetId: $tweetId) { id }
    }"#;
    let removed = graphql(&client, delete, vars.clone());
    assert_eq!(removed["data"]["deleteFavorite"]["id"], favorite["id"]);
    let again = graphql(&client, delete, vars);
    assert_eq!(again["data"]["deleteFavorite"], Value::Null);
    assert!(again.get("errors").is_none(), "{again}");
}

#[test]
fn favorite_of_a_missing_tweet_writes_nothing() {
    let (dir, client) = client_with(Some(fixture()));
    let path = dir.path().join("db.json");
    let before = std::fs::read(&path).unwrap();

    let response = graphql(
        &client,
        r#"mutation { createFavorite(userId: "u1", tweetId: "nope") { id } }"#,
        json!({}),
    );
    assert_eq!(error_codes(&response), ["NOT_FOUND"]);
    assert_eq!(response["errors"][0]["message"], "Tweet nope does not exist");
    assert_eq!(std::fs::read(&path).unwrap(), before);
}
