pub use super::cart_item::Entity as CartItem;
pub use super::comment::Entity as Comment;
pub use super::comment_reaction::Entity as CommentReaction;
pub use super::company_purchase::Entity as CompanyPurchase;
pub use super::course::Entity as Course;
pub use super::course_assignment::Entity as CourseAssignment;
pub use super::course_module::Entity as CourseModule;
pub use super::employee::Entity as Employee;
pub use super::lesson::Entity as Lesson;
pub use super::order::Entity as Order;
pub use super::subscription_plan::Entity as SubscriptionPlan;
pub use super::user::Entity as User;
pub use super::wallet::Entity as Wallet;
pub use super::wallet_transaction::Entity as WalletTransaction;
pub use super::wishlist_item::Entity as WishlistItem;
