use super::*;

/// Tests storing a row without an identity assigns a fresh one.
///
/// Expected: Ok with distinct IDs for two stored rows
#[tokio::test]
async fn store_assigns_identity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Article)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = RecordRepository::<Articles>::new(db);

    let fields = crate::model::article::CreateArticleDto {
        title: "Test Article".to_string(),
        url: "http://test.com".to_string(),
        explanation: "Test Explanation".to_string(),
        email: "test@email.com".to_string(),
        date_added: test_utils::factory::helpers::midnight(2022, 1, 3),
    };

    let first = repo.store(Articles::create(fields.clone())).await?;
    let second = repo.store(Articles::create(fields)).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(first.title, "Test Article");

    Ok(())
}

/// Tests storing a row with an existing identity overwrites every mutable column.
///
/// Expected: Ok with the same ID and only the replacement's values
#[tokio::test]
async fn store_overwrites_existing_identity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Article)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let existing = factory::create_article(db).await?;
    let repo = RecordRepository::<Articles>::new(db);

    let replacement = UpdateArticleDto {
        title: "Replaced".to_string(),
        ..Default::default()
    };
    let stored = repo
        .store(Articles::replace(existing.clone(), replacement))
        .await?;

    assert_eq!(stored.id, existing.id);
    assert_eq!(stored.title, "Replaced");
    assert_eq!(stored.url, "");
    assert_eq!(stored.date_added, chrono::NaiveDateTime::default());

    let all = repo.find_all().await?;
    assert_eq!(all.len(), 1);

    Ok(())
}

/// Tests finding a row by identity.
///
/// Expected: Some for a stored ID, None for an unknown one
#[tokio::test]
async fn find_by_id_returns_stored_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Article)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let article = factory::create_article(db).await?;
    let repo = RecordRepository::<Articles>::new(db);

    assert_eq!(repo.find_by_id(article.id).await?, Some(article.clone()));
    assert_eq!(repo.find_by_id(article.id + 100).await?, None);

    Ok(())
}

/// Tests listing returns every stored row.
#[tokio::test]
async fn find_all_returns_every_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Article)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = RecordRepository::<Articles>::new(db);

    assert!(repo.find_all().await?.is_empty());

    let first = factory::create_article(db).await?;
    let second = factory::create_article(db).await?;

    let all = repo.find_all().await?;
    assert_eq!(all.len(), 2);
    assert!(all.contains(&first));
    assert!(all.contains(&second));

    Ok(())
}

/// Tests deleting a row removes only that row.
#[tokio::test]
async fn delete_removes_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Article)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let kept = factory::create_article(db).await?;
    let removed = factory::create_article(db).await?;
    let repo = RecordRepository::<Articles>::new(db);

    repo.delete(removed.id).await?;

    assert_eq!(repo.find_by_id(removed.id).await?, None);
    assert_eq!(repo.find_all().await?, vec![kept]);

    Ok(())
}

/// Tests creating an organization with an existing code replaces it.
///
/// Expected: One stored organization carrying the second create's values
#[tokio::test]
async fn organization_create_overwrites_same_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UcsbOrganization)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::ucsb_organization::UcsbOrganizationFactory::new(db)
        .org_code("ZPR")
        .build()
        .await?;
    let repo = RecordRepository::<UcsbOrganizations>::new(db);

    let stored = repo
        .store(UcsbOrganizations::create(CreateUcsbOrganizationDto {
            org_code: "ZPR".to_string(),
            org_translation_short: "ZETA PHI RHO".to_string(),
            org_translation: "ZETA PHI RHO".to_string(),
            inactive: true,
        }))
        .await?;

    assert_eq!(stored.org_code, "ZPR");
    assert_eq!(stored.org_translation, "ZETA PHI RHO");
    assert!(stored.inactive);

    let all = repo.find_all().await?;
    assert_eq!(all, vec![stored]);

    Ok(())
}

/// Tests a replacement keeps the natural key of the existing organization.
#[tokio::test]
async fn organization_replace_keeps_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UcsbOrganization)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let existing = factory::create_organization(db).await?;
    let repo = RecordRepository::<UcsbOrganizations>::new(db);

    let active = UcsbOrganizations::replace(existing.clone(), Default::default());
    assert!(matches!(&active.org_code, ActiveValue::Set(code) if *code == existing.org_code));

    let stored = repo.store(active).await?;
    assert_eq!(stored.org_code, existing.org_code);
    assert_eq!(stored.org_translation, "");

    Ok(())
}
