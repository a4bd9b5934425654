//! Order service: cart checkout from wallet funds and the student dashboard.

use sea_orm::DatabaseConnection;

use entity::wallet_transaction::Kind;

use crate::server::{
    data::{
        cart::CartRepository,
        course::CourseRepository,
        order::{OrderRepository, ORDER_STATUS_COMPLETED},
        wallet::WalletRepository,
        wishlist::WishlistRepository,
    },
    error::{wallet::WalletError, AppError},
    model::order::{Order, PaginatedOrders, PlacedOrders, StudentDashboard},
};

/// Orders shown on the dashboard without paging.
const DASHBOARD_RECENT_ORDERS: usize = 5;

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks out the student's cart with wallet funds.
    ///
    /// Each line settles independently: the student wallet is debited (the
    /// guarded update aborts the line on insufficient funds before anything
    /// is written for it), the teacher wallet is credited, both transactions
    /// are recorded, and a completed order row is written. The cart is
    /// cleared once every line settles.
    ///
    /// # Returns
    /// - `Ok(PlacedOrders)` - All orders written by this checkout
    /// - `Err(AppError::BadRequest)` - Empty cart, unavailable course, or duplicate purchase
    /// - `Err(AppError::WalletErr(_))` - Missing wallet or insufficient funds
    pub async fn place_order(&self, student_id: i32) -> Result<PlacedOrders, AppError> {
        let cart_repo = CartRepository::new(self.db);
        let order_repo = OrderRepository::new(self.db);
        let wallet_repo = WalletRepository::new(self.db);

        let lines = cart_repo.get_for_owner(student_id).await?;
        if lines.is_empty() {
            return Err(AppError::BadRequest("Cart is empty".to_string()));
        }

        let Some(wallet) = wallet_repo.get_by_user(student_id).await? else {
            return Err(WalletError::NotFound(student_id).into());
        };

        let mut orders = Vec::new();
        let mut total_cents = 0;

        for (item, course) in lines {
            let Some(course) = course.filter(|c| c.is_published) else {
                return Err(AppError::BadRequest(
                    "A course in the cart is no longer available".to_string(),
                ));
            };

            if order_repo
                .exists_for_student_course(student_id, course.id)
                .await?
            {
                return Err(AppError::BadRequest(format!(
                    "Course '{}' has already been purchased",
                    course.title
                )));
            }

            let amount_cents = item.unit_price_cents * item.seats as i64;

            if !wallet_repo.debit(student_id, amount_cents).await? {
                return Err(WalletError::InsufficientFunds {
                    requested_cents: amount_cents,
                }
                .into());
            }
            wallet_repo
                .record_transaction(
                    wallet.id,
                    amount_cents,
                    Kind::Debit,
                    format!("Purchase of course '{}'", course.title),
                )
                .await?;

            self.credit_teacher(course.teacher_id, amount_cents, &course.title)
                .await?;

            let order = order_repo
                .create(student_id, course.id, amount_cents, ORDER_STATUS_COMPLETED)
                .await?;

            total_cents += amount_cents;
            orders.push(Order {
                order,
                course_title: course.title,
            });
        }

        cart_repo.clear(student_id).await?;

        Ok(PlacedOrders {
            orders,
            total_cents,
        })
    }

    /// Gets the student's order history, newest first
    pub async fn get_orders(
        &self,
        student_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedOrders, AppError> {
        let repo = OrderRepository::new(self.db);

        let (rows, total) = repo
            .get_paginated_by_student(student_id, page, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedOrders {
            orders: rows.into_iter().map(order_with_title).collect(),
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Gets the courses the student owns through completed orders
    pub async fn owned_courses(
        &self,
        student_id: i32,
    ) -> Result<Vec<entity::course::Model>, AppError> {
        let course_ids = OrderRepository::new(self.db)
            .owned_course_ids(student_id)
            .await?;

        Ok(CourseRepository::new(self.db).get_by_ids(&course_ids).await?)
    }

    /// Builds the student dashboard aggregates.
    ///
    /// Order count and spend total are aggregated over the student's full
    /// order history; the wallet balance and wishlist count are read alongside.
    pub async fn get_dashboard(&self, student_id: i32) -> Result<StudentDashboard, AppError> {
        let order_repo = OrderRepository::new(self.db);
        let wallet_repo = WalletRepository::new(self.db);
        let wishlist_repo = WishlistRepository::new(self.db);

        let rows = order_repo.get_all_by_student(student_id).await?;
        let orders_placed = rows.len() as u64;
        let total_spent_cents = rows.iter().map(|(o, _)| o.amount_cents).sum();

        let wallet_balance_cents = wallet_repo
            .get_by_user(student_id)
            .await?
            .map(|w| w.balance_cents)
            .unwrap_or(0);

        let wishlist_count = wishlist_repo.count_for_student(student_id).await?;

        let recent_orders = rows
            .into_iter()
            .take(DASHBOARD_RECENT_ORDERS)
            .map(order_with_title)
            .collect();

        Ok(StudentDashboard {
            orders_placed,
            total_spent_cents,
            wallet_balance_cents,
            wishlist_count,
            recent_orders,
        })
    }

    /// Credits a course sale to the teacher's wallet.
    ///
    /// Teachers registered before wallets existed may lack one; it is created
    /// on first sale so the credit never silently vanishes.
    async fn credit_teacher(
        &self,
        teacher_id: i32,
        amount_cents: i64,
        course_title: &str,
    ) -> Result<(), AppError> {
        let wallet_repo = WalletRepository::new(self.db);

        let wallet = match wallet_repo.get_by_user(teacher_id).await? {
            Some(wallet) => wallet,
            None => wallet_repo.create(teacher_id).await?,
        };

        wallet_repo.credit(teacher_id, amount_cents).await?;
        wallet_repo
            .record_transaction(
                wallet.id,
                amount_cents,
                Kind::Credit,
                format!("Sale of course '{}'", course_title),
            )
            .await?;

        Ok(())
    }
}

fn order_with_title(
    (order, course): (entity::order::Model, Option<entity::course::Model>),
) -> Order {
    Order {
        course_title: course.map(|c| c.title).unwrap_or_default(),
        order,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;
    use test_utils::factory::course::CourseFactory;
    use test_utils::factory::user::{create_student, create_teacher};
    use test_utils::factory::wallet::create_wallet;

    use crate::server::model::cart::AddCartItemParam;

    /// Tests a full cart checkout.
    ///
    /// Verifies that the student wallet is debited, the teacher wallet is
    /// credited the same amount, the order row is written, and the cart ends
    /// empty.
    ///
    /// Expected: Ok with one completed order and both wallets settled
    #[tokio::test]
    async fn checks_out_cart_with_wallet_funds() {
        let test = TestBuilder::new().with_commerce_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let student = create_student(db).await.unwrap();
        let teacher = create_teacher(db).await.unwrap();
        create_wallet(db, student.id, 10_000).await.unwrap();
        create_wallet(db, teacher.id, 0).await.unwrap();
        let course = CourseFactory::new(db, teacher.id)
            .price_cents(4999)
            .build()
            .await
            .unwrap();

        let cart_repo = CartRepository::new(db);
        cart_repo
            .upsert_line(
                AddCartItemParam {
                    owner_id: student.id,
                    course_id: course.id,
                    seats: 1,
                },
                course.price_cents,
            )
            .await
            .unwrap();

        let service = OrderService::new(db);
        let placed = service.place_order(student.id).await.unwrap();

        assert_eq!(placed.orders.len(), 1);
        assert_eq!(placed.total_cents, 4999);
        assert_eq!(placed.orders[0].order.status, ORDER_STATUS_COMPLETED);

        let wallet_repo = WalletRepository::new(db);
        let student_wallet = wallet_repo.get_by_user(student.id).await.unwrap().unwrap();
        let teacher_wallet = wallet_repo.get_by_user(teacher.id).await.unwrap().unwrap();
        assert_eq!(student_wallet.balance_cents, 5001);
        assert_eq!(teacher_wallet.balance_cents, 4999);

        assert!(cart_repo.get_for_owner(student.id).await.unwrap().is_empty());
    }

    /// Tests checkout with a balance below the cart total.
    ///
    /// The guarded debit refuses the line, so no order is written, the cart
    /// survives, and the balance is untouched.
    ///
    /// Expected: Err(InsufficientFunds) with all state unchanged
    #[tokio::test]
    async fn refuses_checkout_beyond_balance() {
        let test = TestBuilder::new().with_commerce_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let student = create_student(db).await.unwrap();
        let teacher = create_teacher(db).await.unwrap();
        create_wallet(db, student.id, 100).await.unwrap();
        create_wallet(db, teacher.id, 0).await.unwrap();
        let course = CourseFactory::new(db, teacher.id)
            .price_cents(4999)
            .build()
            .await
            .unwrap();

        let cart_repo = CartRepository::new(db);
        cart_repo
            .upsert_line(
                AddCartItemParam {
                    owner_id: student.id,
                    course_id: course.id,
                    seats: 1,
                },
                course.price_cents,
            )
            .await
            .unwrap();

        let service = OrderService::new(db);
        let result = service.place_order(student.id).await;

        assert!(matches!(
            result,
            Err(AppError::WalletErr(WalletError::InsufficientFunds { .. }))
        ));

        let wallet = WalletRepository::new(db)
            .get_by_user(student.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(wallet.balance_cents, 100);
        assert_eq!(cart_repo.get_for_owner(student.id).await.unwrap().len(), 1);
        assert_eq!(OrderRepository::new(db).count_all().await.unwrap(), 0);
    }

    /// Tests checking out a course the student already owns.
    ///
    /// Expected: Err(BadRequest) naming the duplicate course
    #[tokio::test]
    async fn refuses_duplicate_purchase() {
        let test = TestBuilder::new().with_commerce_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let student = create_student(db).await.unwrap();
        let teacher = create_teacher(db).await.unwrap();
        create_wallet(db, student.id, 10_000).await.unwrap();
        create_wallet(db, teacher.id, 0).await.unwrap();
        let course = CourseFactory::new(db, teacher.id).build().await.unwrap();

        OrderRepository::new(db)
            .create(student.id, course.id, 1000, ORDER_STATUS_COMPLETED)
            .await
            .unwrap();

        CartRepository::new(db)
            .upsert_line(
                AddCartItemParam {
                    owner_id: student.id,
                    course_id: course.id,
                    seats: 1,
                },
                course.price_cents,
            )
            .await
            .unwrap();

        let result = OrderService::new(db).place_order(student.id).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Tests checking out an empty cart.
    ///
    /// Expected: Err(BadRequest)
    #[tokio::test]
    async fn refuses_empty_cart() {
        let test = TestBuilder::new().with_commerce_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let student = create_student(db).await.unwrap();
        create_wallet(db, student.id, 10_000).await.unwrap();

        let result = OrderService::new(db).place_order(student.id).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Tests the dashboard aggregates.
    ///
    /// Expected: Ok with order count, spend total, balance and wishlist count
    #[tokio::test]
    async fn aggregates_dashboard() {
        let test = TestBuilder::new().with_commerce_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let student = create_student(db).await.unwrap();
        let teacher = create_teacher(db).await.unwrap();
        create_wallet(db, student.id, 1234).await.unwrap();

        let order_repo = OrderRepository::new(db);
        for price in [1000, 2500] {
            let course = CourseFactory::new(db, teacher.id)
                .price_cents(price)
                .build()
                .await
                .unwrap();
            order_repo
                .create(student.id, course.id, price, ORDER_STATUS_COMPLETED)
                .await
                .unwrap();
        }

        let wishlist_course = CourseFactory::new(db, teacher.id).build().await.unwrap();
        WishlistRepository::new(db)
            .toggle(student.id, wishlist_course.id)
            .await
            .unwrap();

        let dashboard = OrderService::new(db).get_dashboard(student.id).await.unwrap();

        assert_eq!(dashboard.orders_placed, 2);
        assert_eq!(dashboard.total_spent_cents, 3500);
        assert_eq!(dashboard.wallet_balance_cents, 1234);
        assert_eq!(dashboard.wishlist_count, 1);
        assert_eq!(dashboard.recent_orders.len(), 2);
    }
}
