//! Key card parsing
//!
//! Card data has the form `<primary>,<secondary>`: exactly one comma, no
//! trimming and no escaping. Whatever policy a parser applies, the returned
//! person always reports the two fields that were on the card.

use std::sync::Arc;

use cellguard_core::{AccessError, AccessResult, Name, Person};

use crate::AccessPolicy;

/// Turns raw card data into a [`Person`]
pub trait CredentialParser {
    fn read(&self, card_data: &str) -> AccessResult<Person>;
}

/// Split card data into its two name fields
pub fn split_card_data(card_data: &str) -> AccessResult<Name> {
    let mut fields = card_data.split(',');
    let (Some(primary), Some(secondary), None) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(AccessError::MalformedCredential {
            fields: card_data.split(',').count(),
        });
    };

    Ok(Name::new(primary, secondary))
}

/// Default key card parser
///
/// Card data with a standing grant in the policy yields a person that
/// matches on that grant. Everything else yields a plain named person.
#[derive(Debug, Clone, Default)]
pub struct KeyCardParser {
    policy: Arc<AccessPolicy>,
}

impl KeyCardParser {
    /// Parser without any standing grants
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser honouring the standing grants of `policy`
    pub fn with_policy(policy: Arc<AccessPolicy>) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }
}

impl CredentialParser for KeyCardParser {
    fn read(&self, card_data: &str) -> AccessResult<Person> {
        let name = split_card_data(card_data)?;

        match self.policy.grant_for(card_data) {
            Some(grant) => {
                tracing::trace!(?grant, "key card carries standing grant");
                Ok(Person::with_grant(name, grant))
            }
            None => Ok(Person::from_name(name)),
        }
    }
}
