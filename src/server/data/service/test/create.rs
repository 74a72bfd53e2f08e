use super::*;

/// Tests creating a new service.
///
/// Verifies that the repository stores every field and assigns an ID.
///
/// Expected: Ok with service created
#[tokio::test]
async fn creates_service() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let unit = factory::create_unit(db).await?;

    let repo = ServiceRepository::new(db);
    let service = repo
        .create(CreateServiceParam {
            unit_id: unit.id,
            fields: fields("Barba", 3000, 20),
        })
        .await?;

    assert!(service.id > 0);
    assert_eq!(service.unit_id, unit.id);
    assert_eq!(service.name, "Barba");
    assert_eq!(service.price_cents, 3000);
    assert_eq!(service.duration_minutes, 20);
    assert!(service.is_active);
    assert_eq!(service.created_at, service.updated_at);

    let db_service = entity::prelude::Service::find_by_id(service.id)
        .one(db)
        .await?;
    assert!(db_service.is_some());
    assert_eq!(db_service.unwrap().price_cents, 3000);

    Ok(())
}

/// Tests creating an inactive service.
///
/// Expected: Ok with the active flag stored as false
#[tokio::test]
async fn creates_inactive_service() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let unit = factory::create_unit(db).await?;

    let mut inactive = fields("Hidratação Capilar", 5000, 30);
    inactive.is_active = false;

    let service = ServiceRepository::new(db)
        .create(CreateServiceParam {
            unit_id: unit.id,
            fields: inactive,
        })
        .await?;

    assert!(!service.is_active);

    Ok(())
}

/// Tests creating a service for a unit that doesn't exist.
///
/// Expected: Err with foreign key constraint error
#[tokio::test]
async fn fails_for_nonexistent_unit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ServiceRepository::new(db)
        .create(CreateServiceParam {
            unit_id: 999_999,
            fields: fields("Barba", 3000, 20),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
