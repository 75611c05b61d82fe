//! Submission assembly.

use crate::domain::{EmailAddress, PhoneNumber};
use crate::intake::normalizer::NormalizedFields;
use crate::models::ContactPayload;

/// Combine validated fields into an immutable payload.
///
/// Purely structural: `email` and `phone` are already validated value
/// objects, and the remaining fields come from the normalizer.
pub fn assemble(fields: NormalizedFields, email: EmailAddress, phone: PhoneNumber) -> ContactPayload {
    let NormalizedFields {
        name,
        service,
        message,
        ..
    } = fields;
    ContactPayload::new(name, email, phone, service, message)
}
