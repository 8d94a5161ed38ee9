use sea_orm::{ActiveModelTrait, ActiveValue};

use super::*;

/// Base path and identity parameter name of every record resource.
const RESOURCES: [(&str, &str); 6] = [
    ("/api/articles", "id"),
    ("/api/helprequests", "id"),
    ("/api/menuitemreview", "id"),
    ("/api/recommendationrequests", "id"),
    ("/api/ucsborganization", "orgCode"),
    ("/api/ucsb-dining-commons-menu-items", "id"),
];

const ARTICLE_QUERY: &str = "title=Test%20Article&url=http%3A%2F%2Ftest.com\
    &explanation=Test%20Explanation&email=test%40email.com&dateAdded=2022-01-03T00%3A00%3A00";

/// Tests creating an article returns it with an assigned identity and that reading it
/// back yields byte-identical JSON.
#[tokio::test]
async fn create_then_get_round_trips() -> Result<(), AppError> {
    let app = TestApp::new(Caller::Admin).await?;

    let (status, created) = app
        .send(
            Method::POST,
            &format!("/api/articles/post?{}", ARTICLE_QUERY),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let record: Value = serde_json::from_slice(&created).unwrap();
    assert_eq!(record["title"], json!("Test Article"));
    assert_eq!(record["url"], json!("http://test.com"));
    assert_eq!(record["explanation"], json!("Test Explanation"));
    assert_eq!(record["email"], json!("test@email.com"));
    assert_eq!(record["dateAdded"], json!("2022-01-03T00:00:00"));
    let id = record["id"].as_i64().unwrap();

    let (status, fetched) = app
        .send(Method::GET, &format!("/api/articles?id={}", id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    Ok(())
}

/// Tests creating an organization uses the supplied code as its identity.
#[tokio::test]
async fn create_organization_keeps_org_code() -> Result<(), AppError> {
    let app = TestApp::new(Caller::Admin).await?;

    let (status, body) = app
        .send_json(
            Method::POST,
            "/api/ucsborganization/post?orgCode=ZPR&orgTranslationShort=ZETA%20PHI%20RHO\
             &orgTranslation=ZETA%20PHI%20RHO&inactive=false",
            None,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "orgCode": "ZPR",
            "orgTranslationShort": "ZETA PHI RHO",
            "orgTranslation": "ZETA PHI RHO",
            "inactive": false
        })
    );

    let (status, fetched) = app.get("/api/ucsborganization?orgCode=ZPR").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);

    Ok(())
}

/// Tests create rejects missing or malformed fields.
///
/// Expected: 400 with a ValidationException envelope
#[tokio::test]
async fn create_rejects_missing_fields() -> Result<(), AppError> {
    let app = TestApp::new(Caller::Admin).await?;

    let (status, body) = app
        .send_json(Method::POST, "/api/articles/post?title=Only", None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["type"], json!("ValidationException"));

    let (status, _) = app
        .send_json(
            Method::POST,
            "/api/menuitemreview/post?itemId=abc&reviewerEmail=a%40b.c&stars=5\
             &dateReviewed=2022-01-03T00%3A00%3A00&comments=ok",
            None,
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests an unparseable identity is a validation error.
#[tokio::test]
async fn get_rejects_malformed_identity() -> Result<(), AppError> {
    let app = TestApp::new(Caller::User).await?;

    let (status, _) = app.get("/api/articles?id=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.get("/api/articles").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests listing returns every stored record.
#[tokio::test]
async fn list_returns_all_records() -> Result<(), AppError> {
    let app = TestApp::new(Caller::User).await?;
    let first = factory::create_help_request(app.db()).await?;
    let second = factory::help_request::HelpRequestFactory::new(app.db())
        .solved(true)
        .build()
        .await?;

    let (status, body) = app.get("/api/helprequests/all").await;

    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 2);
    let ids: Vec<i64> = records.iter().map(|r| r["id"].as_i64().unwrap()).collect();
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&second.id));

    Ok(())
}

/// Tests update replaces every mutable field and keeps the identity.
///
/// Fields omitted from the body become defaults rather than keeping stored values,
/// and an identity in the body is ignored.
#[tokio::test]
async fn update_replaces_every_field() -> Result<(), AppError> {
    let app = TestApp::new(Caller::Admin).await?;
    let article = factory::create_article(app.db()).await?;

    let (status, body) = app
        .send_json(
            Method::PUT,
            &format!("/api/articles?id={}", article.id),
            Some(json!({"id": 999, "title": "New Title", "email": "new@ucsb.edu"})),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": article.id,
            "title": "New Title",
            "url": "",
            "explanation": "",
            "email": "new@ucsb.edu",
            "dateAdded": "1970-01-01T00:00:00"
        })
    );

    let (_, fetched) = app.get(&format!("/api/articles?id={}", article.id)).await;
    assert_eq!(fetched, body);

    let (_, all) = app.get("/api/articles/all").await;
    assert_eq!(all.as_array().unwrap().len(), 1);

    Ok(())
}

/// Tests updating an organization keeps its code.
#[tokio::test]
async fn update_organization_keeps_org_code() -> Result<(), AppError> {
    let app = TestApp::new(Caller::Admin).await?;
    factory::ucsb_organization::UcsbOrganizationFactory::new(app.db())
        .org_code("SKY")
        .build()
        .await?;

    let (status, body) = app
        .send_json(
            Method::PUT,
            "/api/ucsborganization?orgCode=SKY",
            Some(json!({
                "orgCode": "OTHER",
                "orgTranslationShort": "SKYDIVING CLUB",
                "orgTranslation": "SKYDIVING CLUB AT UCSB",
                "inactive": true
            })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["orgCode"], json!("SKY"));
    assert_eq!(body["orgTranslation"], json!("SKYDIVING CLUB AT UCSB"));
    assert_eq!(body["inactive"], json!(true));

    let (status, _) = app.get("/api/ucsborganization?orgCode=OTHER").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests deleting an existing record and then deleting it again.
///
/// Expected: 200 with a deleted message, then 404 with a not-found message
#[tokio::test]
async fn delete_then_delete_again() -> Result<(), AppError> {
    let app = TestApp::new(Caller::Admin).await?;
    entity::article::ActiveModel {
        id: ActiveValue::Set(15),
        title: ActiveValue::Set("Fifteen".to_string()),
        url: ActiveValue::Set("https://example.com/15".to_string()),
        explanation: ActiveValue::Set("Explanation".to_string()),
        email: ActiveValue::Set("test@email.com".to_string()),
        date_added: ActiveValue::Set(factory::helpers::midnight(2022, 1, 3)),
    }
    .insert(app.db())
    .await?;

    let (status, body) = app.send_json(Method::DELETE, "/api/articles?id=15", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Articles with id 15 deleted"}));

    let (status, _) = app.get("/api/articles?id=15").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.send_json(Method::DELETE, "/api/articles?id=15", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({
            "type": "EntityNotFoundException",
            "message": "Articles with id 15 not found"
        })
    );

    Ok(())
}

/// Tests get, update and delete of unknown identities report the resource's name.
#[tokio::test]
async fn unknown_identity_is_not_found_for_every_resource() -> Result<(), AppError> {
    let app = TestApp::new(Caller::Admin).await?;

    let expected = [
        ("/api/articles?id=7", "Articles with id 7 not found"),
        ("/api/helprequests?id=7", "HelpRequest with id 7 not found"),
        ("/api/menuitemreview?id=7", "MenuItemReview with id 7 not found"),
        (
            "/api/recommendationrequests?id=7",
            "RecommendationRequest with id 7 not found",
        ),
        (
            "/api/ucsborganization?orgCode=ZPR",
            "UCSBOrganization with id ZPR not found",
        ),
        (
            "/api/ucsb-dining-commons-menu-items?id=7",
            "UCSBDiningCommonsMenuItem with id 7 not found",
        ),
    ];

    for (uri, message) in expected {
        for (method, body) in [
            (Method::GET, None),
            (Method::PUT, Some(json!({}))),
            (Method::DELETE, None),
        ] {
            let (status, response) = app.send_json(method.clone(), uri, body).await;

            assert_eq!(status, StatusCode::NOT_FOUND, "{} {}", method, uri);
            assert_eq!(response["type"], json!("EntityNotFoundException"));
            assert_eq!(response["message"], json!(message), "{} {}", method, uri);
        }
    }

    Ok(())
}

/// Tests anonymous callers are refused every record operation.
#[tokio::test]
async fn anonymous_is_denied_everything() -> Result<(), AppError> {
    let app = TestApp::new(Caller::Anonymous).await?;

    for (base, key) in RESOURCES {
        let requests = [
            (Method::GET, format!("{}/all", base), None),
            (Method::GET, format!("{}?{}=1", base, key), None),
            (Method::POST, format!("{}/post", base), None),
            (Method::PUT, format!("{}?{}=1", base, key), Some(json!({}))),
            (Method::DELETE, format!("{}?{}=1", base, key), None),
        ];

        for (method, uri, body) in requests {
            let (status, response) = app.send_json(method.clone(), &uri, body).await;

            assert_eq!(status, StatusCode::FORBIDDEN, "{} {}", method, uri);
            assert_eq!(response["type"], json!("AccessDeniedException"));
        }
    }

    Ok(())
}

/// Tests regular users may read every resource but not write to it.
///
/// Writes are refused before parameters are validated, so even a create without
/// fields yields 403.
#[tokio::test]
async fn user_reads_but_cannot_write() -> Result<(), AppError> {
    let app = TestApp::new(Caller::User).await?;

    for (base, key) in RESOURCES {
        let (status, body) = app.get(&format!("{}/all", base)).await;
        assert_eq!(status, StatusCode::OK, "list {}", base);
        assert_eq!(body, json!([]));

        let (status, _) = app.get(&format!("{}?{}=1", base, key)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "get {}", base);

        let writes = [
            (Method::POST, format!("{}/post", base), None),
            (Method::PUT, format!("{}?{}=1", base, key), Some(json!({}))),
            (Method::DELETE, format!("{}?{}=1", base, key), None),
        ];

        for (method, uri, body) in writes {
            let (status, _) = app.send_json(method.clone(), &uri, body).await;
            assert_eq!(status, StatusCode::FORBIDDEN, "{} {}", method, uri);
        }
    }

    Ok(())
}

/// Tests admins can perform the full lifecycle on a dining commons menu item.
#[tokio::test]
async fn admin_manages_menu_items() -> Result<(), AppError> {
    let app = TestApp::new(Caller::Admin).await?;
    let existing = factory::create_menu_item(app.db()).await?;

    let (status, created) = app
        .send_json(
            Method::POST,
            "/api/ucsb-dining-commons-menu-items/post?diningCommonsCode=portola\
             &name=Baked%20Pesto%20Pasta&station=Entree%20Specials",
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["diningCommonsCode"], json!("portola"));
    assert_ne!(created["id"], json!(existing.id));

    let (_, all) = app.get("/api/ucsb-dining-commons-menu-items/all").await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (status, body) = app
        .send_json(
            Method::DELETE,
            &format!("/api/ucsb-dining-commons-menu-items?id={}", existing.id),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        json!(format!(
            "UCSBDiningCommonsMenuItem with id {} deleted",
            existing.id
        ))
    );

    let (_, all) = app.get("/api/ucsb-dining-commons-menu-items/all").await;
    assert_eq!(all, json!([created]));

    Ok(())
}

/// Tests identities beyond the 32-bit range are looked up rather than rejected.
///
/// Expected: 404 with the not-found message for get, update and delete
#[tokio::test]
async fn large_identity_is_not_found() -> Result<(), AppError> {
    let app = TestApp::new(Caller::Admin).await?;

    for (method, body) in [
        (Method::GET, None),
        (Method::PUT, Some(json!({}))),
        (Method::DELETE, None),
    ] {
        let (status, response) = app
            .send_json(method.clone(), "/api/articles?id=3000000000", body)
            .await;

        assert_eq!(status, StatusCode::NOT_FOUND, "{}", method);
        assert_eq!(
            response,
            json!({
                "type": "EntityNotFoundException",
                "message": "Articles with id 3000000000 not found"
            })
        );
    }

    Ok(())
}

/// Tests a record stored with a 64-bit identity can be read back.
#[tokio::test]
async fn large_identity_round_trips() -> Result<(), AppError> {
    let app = TestApp::new(Caller::User).await?;
    entity::help_request::ActiveModel {
        id: ActiveValue::Set(3_000_000_000),
        requester_email: ActiveValue::Set("student@ucsb.edu".to_string()),
        team_id: ActiveValue::Set("s22-5pm-3".to_string()),
        table_or_breakout_room: ActiveValue::Set("7".to_string()),
        request_time: ActiveValue::Set(factory::helpers::midnight(2022, 4, 20)),
        explanation: ActiveValue::Set("Need help".to_string()),
        solved: ActiveValue::Set(false),
    }
    .insert(app.db())
    .await?;

    let (status, body) = app.get("/api/helprequests?id=3000000000").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], json!(3_000_000_000i64));
    assert_eq!(body["teamId"], json!("s22-5pm-3"));

    Ok(())
}
