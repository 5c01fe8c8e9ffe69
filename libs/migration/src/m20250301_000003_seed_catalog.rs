use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(
            r#"
            INSERT INTO categories (category_id, name, description)
            VALUES
                (1, 'Electronics', 'Explore the latest gadgets and electronic devices.'),
                (2, 'Fashion', 'Discover trendy clothing and accessories for men and women.'),
                (3, 'Home & Kitchen', 'Find everything you need to decorate and equip your home.')
            ON CONFLICT (category_id) DO NOTHING
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            INSERT INTO products (
                product_id, category_id, name, price, description,
                sub_category, stock, is_featured, image_url
            )
            VALUES
                (1, 1, 'Smartphone', 49999, 'A powerful and feature-rich smartphone for all your communication needs.', 'Black', 50, false, 'smartphone.jpg'),
                (2, 1, 'Laptop', 89999, 'A high-performance laptop for work and entertainment.', 'Gray', 30, false, 'laptop.jpg'),
                (3, 1, 'Headphones', 9999, 'Immerse yourself in music with these high-quality headphones.', 'White', 100, true, 'headphones.jpg'),
                (4, 2, 'Men''s T-Shirt', 2999, 'A comfortable and stylish t-shirt for everyday wear.', 'Black', 100, false, 'mens-tshirt.jpg'),
                (5, 2, 'Women''s Dress', 5999, 'A beautiful and elegant dress for special occasions.', 'Red', 50, true, 'womens-dress.jpg'),
                (6, 3, 'Cookware Set', 14999, 'A complete set of high-quality cookware for your kitchen.', 'Silver', 20, false, 'cookware-set.jpg'),
                (7, 3, 'Coffee Maker', 7999, 'Brew delicious coffee at home with this programmable coffee maker.', 'Black', 40, true, 'coffee-maker.jpg')
            ON CONFLICT (product_id) DO NOTHING
            "#,
        )
        .await?;

        // Explicit ids above leave the serial sequences behind.
        db.execute_unprepared(
            r#"
            SELECT setval(pg_get_serial_sequence('categories', 'category_id'), (SELECT MAX(category_id) FROM categories));
            SELECT setval(pg_get_serial_sequence('products', 'product_id'), (SELECT MAX(product_id) FROM products));
            "#,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Delete in reverse order of foreign key dependencies
        manager
            .get_connection()
            .execute_unprepared("DELETE FROM products WHERE product_id BETWEEN 1 AND 7")
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DELETE FROM categories WHERE category_id BETWEEN 1 AND 3")
            .await?;

        Ok(())
    }
}
