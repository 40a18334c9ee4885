use crate::model::Product;

super::entity_repository!(Product);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_add, expect_get_all, expect_remove};
    use crate::framework::Repository;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_get_all_returns_actor_snapshot() {
        let (client, mut receiver) = create_mock_client::<Product>(4);
        let repository = ProductRepository::new(client);

        let task = tokio::spawn(async move { repository.get_all().await });

        let responder = expect_get_all(&mut receiver)
            .await
            .expect("Expected GetAll request");
        responder
            .send(vec![Product::new(2, "Mouse", dec!(25.00))])
            .unwrap();

        let products = task.await.unwrap().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Mouse");
    }

    #[tokio::test]
    async fn test_add_forwards_entity() {
        let (client, mut receiver) = create_mock_client::<Product>(4);
        let repository = ProductRepository::new(client);
        let webcam = Product::new(5, "Webcam", dec!(50.00));

        let sent = webcam.clone();
        let task = tokio::spawn(async move { repository.add(sent).await });

        let (entity, responder) = expect_add(&mut receiver)
            .await
            .expect("Expected Add request");
        assert_eq!(entity, webcam);
        responder.send(()).unwrap();

        task.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_remove_reports_actor_answer() {
        let (client, mut receiver) = create_mock_client::<Product>(4);
        let repository = ProductRepository::new(client);

        let task = tokio::spawn(async move {
            repository
                .remove(Product::new(9, "Missing", dec!(1.00)))
                .await
        });

        let (entity, responder) = expect_remove(&mut receiver)
            .await
            .expect("Expected Remove request");
        assert_eq!(entity.name, "Missing");
        responder.send(false).unwrap();

        assert!(!task.await.unwrap().unwrap());
    }
}
