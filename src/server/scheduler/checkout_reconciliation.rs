use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::purchase::PurchaseRepository, error::AppError, service::checkout::CheckoutClient,
};

/// Starts the checkout reconciliation scheduler
///
/// This scheduler runs every minute and sweeps purchases that are still
/// `pending` with a stored provider session, fetching each session and
/// copying its payment status onto the purchase. Companies that never return
/// through the success redirect still converge to the provider's state.
///
/// # Arguments
/// - `db`: Database connection
/// - `checkout`: Checkout provider client
pub async fn start_scheduler(
    db: DatabaseConnection,
    checkout: CheckoutClient,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_db = db.clone();
    let job_checkout = checkout.clone();

    // Schedule job to run every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = job_db.clone();
        let checkout = job_checkout.clone();

        Box::pin(async move {
            if let Err(e) = reconcile_pending_purchases(&db, &checkout).await {
                tracing::error!("Error reconciling pending purchases: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Checkout reconciliation scheduler started");

    Ok(())
}

/// Sweeps pending purchases and copies settled provider statuses.
///
/// One bad record never aborts the sweep; fetch failures are logged and the
/// purchase stays pending for the next run.
async fn reconcile_pending_purchases(
    db: &DatabaseConnection,
    checkout: &CheckoutClient,
) -> Result<(), AppError> {
    let repo = PurchaseRepository::new(db);

    let pending = repo.get_pending_with_session().await?;

    for purchase in pending {
        let Some(session_id) = purchase.checkout_session_id.as_deref() else {
            continue;
        };

        match checkout.get_session(session_id).await {
            Ok(session) => {
                // "unpaid" means the customer hasn't completed the flow yet;
                // keep polling until the provider reports a settled state
                if session.payment_status == "unpaid" {
                    continue;
                }

                tracing::info!(
                    "Purchase {} checkout status: {} -> {}",
                    purchase.id,
                    purchase.checkout_status,
                    session.payment_status
                );

                repo.set_checkout_status(purchase.id, &session.payment_status)
                    .await?;
            }
            Err(e) => {
                tracing::error!(
                    "Failed to fetch checkout session for purchase {}: {}",
                    purchase.id,
                    e
                );
            }
        }
    }

    Ok(())
}
