mod common;

use common::*;
use rocket::http::Status;
use serde_json::{json, Value};

fn two_tweets() -> Value {
    json!({
        "users": [user("u1", "ada")],
        "tweets": [tweet("t1", "u1", T0), tweet("t2", "u1", T1)]
    })
}

#[test]
fn tweets_are_newest_first_with_zero_favorites() {
    let (_dir, client) = client_with(Some(two_tweets()));

    let response = graphql(&client, "{ tweets { id body stats { favoriteCount } } }", json!({}));
    assert!(response.get("errors").is_none(), "{response}");
    assert_eq!(
        response["data"]["tweets"],
        json!([
            { "id": "t2", "body": "t2 says hi", "stats": { "favoriteCount": 0 } },
            { "id": "t1", "body": "t1 says hi", "stats": { "favoriteCount": 0 } }
        ])
    );
}

#[test]
fn tweet_fields_resolve_from_the_primed_caches() {
    let fixture = json!({
        "users": [user("u1", "ada"), user("u2", "grace")],
        "tweets": [tweet("t1", "u1", T0), tweet("t2", "u2", T1)],
        "favorites": [
            { "id": "f1", "userId": "u1", "tweetId": "t2", "createdAt": T1, "updatedAt": T1 },
            { "id": "f2", "userId": "u2", "tweetId": "t2", "createdAt": T1, "updatedAt": T1 }
        ]
    });
    let (_dir, client) = client_with(Some(fixture));

    let response = graphql(
        &client,
        "{ tweets { id createdAt author { handle } stats { commentCount retweetCount favoriteCount } favorited } }",
        json!({}),
    );
    assert!(response.get("errors").is_none(), "{response}");
    let tweets = &response["data"]["tweets"];
    assert_eq!(tweets[0]["id"], "t2");
    assert_eq!(tweets[0]["createdAt"], T1);
    assert_eq!(tweets[0]["author"]["handle"], "grace");
    assert_eq!(
        tweets[0]["stats"],
        json!({ "commentCount": 99, "retweetCount": 1, "favoriteCount": 2 })
    );
    assert_eq!(tweets[0]["favorited"], true);
    assert_eq!(tweets[1]["author"]["handle"], "ada");
    assert_eq!(tweets[1]["favorited"], false);
}

#[test]
fn users_are_scanned_once_per_request() {
    let tweets: Vec<Value> = (0..25)
        .map(|i| {
            let author = if i % 2 == 0 { "u1" } else { "u2" };
            tweet(&format!("t{i}"), author, &format!("2022-07-09T10:{i:02}:00.000Z"))
        })
        .collect();
    let fixture = json!({
        "users": [user("u1", "ada"), user("u2", "grace")],
        "tweets": tweets
    });
    let (_dir, client) = client_with(Some(fixture));
    let query = "{ currentUser { handle } tweets { author { name handle } } }";

    let before = store(&client).user_scans();
    let response = graphql(&client, query, json!({}));
    assert!(response.get("errors").is_none(), "{response}");
    assert_eq!(response["data"]["tweets"].as_array().unwrap().len(), 25);
    assert_eq!(store(&client).user_scans() - before, 1);

    // A second request starts from empty caches.
    graphql(&client, query, json!({}));
    assert_eq!(store(&client).user_scans() - before, 2);
}

#[test]
fn current_user_on_an_empty_store_is_an_error() {
    let (_dir, client) = client_with(None);

    let response = graphql(&client, "{ currentUser { id } }", json!({}));
    assert_eq!(response["data"], Value::Null);
    assert_eq!(error_codes(&response), ["EMPTY_STORE"]);
    assert_eq!(response["errors"][0]["path"], json!(["currentUser"]));
}

#[test]
fn current_user_profile() {
    let (_dir, client) = client_with(Some(two_tweets()));

    let response = graphql(
        &client,
        "{ currentUser { id handle avatarUrl coverUrl stats { tweetCount followingCount followerCount } } }",
        json!({}),
    );
    assert!(response.get("errors").is_none(), "{response}");
    let user = &response["data"]["currentUser"];
    assert_eq!(user["id"], "u1");
    assert_eq!(user["avatarUrl"], "https://example.com/ada.png");
    assert_eq!(
        user["stats"],
        json!({ "tweetCount": 2, "followingCount": 123, "followerCount": 456789 })
    );
}

#[test]
fn suggestions_and_trends() {
    let fixture = json!({
        "suggestions": [
            { "id": "suggestion-1", "name": "Alan", "handle": "alan", "avatarUrl": "a.png", "reason": "You follow Ada" }
        ],
        "hashtagTrends": [
            { "id": "hashtrend-1", "kind": "hashtag", "hashtag": "rust", "tweetCount": 50 }
        ],
        "topicTrends": [
            { "id": "topictrend-1", "kind": "topic", "topic": "Compilers", "tweetCount": 80 }
        ],
        "topicTrendQuotes": [
            {
                "id": "topictrendquote-1",
                "topicTrendId": "topictrend-1",
                "title": "Parsing",
                "description": "Recursive descent",
                "imageUrl": "p.png"
            }
        ]
    });
    let (_dir, client) = client_with(Some(fixture));

    let response = graphql(
        &client,
        r#"{
            suggestions { name handle avatarUrl reason }
            trends {
                __typename
                ... on HashtagTrend { hashtag tweetCount }
                ... on TopicTrend { topic tweetCount quote { title imageUrl description } }
            }
        }"#,
        json!({}),
    );
    assert!(response.get("errors").is_none(), "{response}");
    assert_eq!(
        response["data"]["suggestions"],
        json!([{ "name": "Alan", "handle": "alan", "avatarUrl": "a.png", "reason": "You follow Ada" }])
    );
    assert_eq!(
        response["data"]["trends"],
        json!([
            {
                "__typename": "TopicTrend",
                "topic": "Compilers",
                "tweetCount": 80,
                "quote": { "title": "Parsing", "imageUrl": "p.png", "description": "Recursive descent" }
            },
            { "__typename": "HashtagTrend", "hashtag": "rust", "tweetCount": 50 }
        ])
    );
}

#[test]
fn graphiql_and_unknown_routes() {
    let (_dir, client) = client_with(None);

    let page = client.get("/graphql").dispatch();
    assert_eq!(page.status(), Status::Ok);
    assert!(page.into_string().unwrap().to_lowercase().contains("graphiql"));

    let missing = client.get("/nope").dispatch();
    assert_eq!(missing.status(), Status::NotFound);
    assert_eq!(response_json_value(missing)["reason"], "Resource was not found.");
}

#[test]
fn malformed_store_stops_ignition() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");
    std::fs::write(&path, "{ \"users\": 42 }").unwrap();
    let figment = rocket::Config::figment()
        .merge(("db_path", path))
        .merge(("log_level", "off"));

    match rocket::local::blocking::Client::tracked(twitter_server::rocket_from(figment)) {
        Ok(_) => panic!("a malformed store must not ignite"),
        Err(e) => assert!(matches!(
            e.kind(),
            rocket::error::ErrorKind::FailedFairings(_)
        )),
    }
}
