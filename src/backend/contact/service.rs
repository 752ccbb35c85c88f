//! Contact form submissions. Anyone may submit; only authenticated callers
//! may read them back.

use crate::backend::error::ApiError;
use crate::backend::store::ContactStore;
use crate::shared::models::{ContactMessage, ContactRequest};

pub const CONTACT_THANKS: &str = "Thank you for your message! We will get back to you soon.";

pub async fn submit<S>(store: &S, request: ContactRequest) -> Result<ContactMessage, ApiError>
where
    S: ContactStore + ?Sized,
{
    let new_message = request.into_new()?;
    let message = store.insert_message(new_message).await?;
    tracing::info!("Contact message {} received", message.id);
    Ok(message)
}

/// Every submission, newest first
pub async fn list_messages<S>(store: &S) -> Result<Vec<ContactMessage>, ApiError>
where
    S: ContactStore + ?Sized,
{
    Ok(store.list_messages().await?)
}
