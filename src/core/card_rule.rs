//! Card rule business logic - Handles all billing-cycle rule operations.
//!
//! Provides functions for creating, retrieving, and toggling card rules.
//! All functions are async and return Result types for error handling.

use crate::{
    entities::{CardRule, card_rule},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Looks up a card rule by payment-method name.
///
/// This is the lookup the installment scheduler depends on: a `Some` result
/// marks the payment method as a credit card; `None` means a direct method.
/// Inactive rules still resolve here so historical purchases keep following
/// their card's billing cycle after the card is retired.
pub async fn find_card_rule(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<card_rule::Model>> {
    CardRule::find()
        .filter(card_rule::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all active card rules, ordered alphabetically by name.
///
/// Used to populate the payment-method selector on entry forms; retired
/// cards are hidden here but remain visible to [`find_card_rule`].
pub async fn get_active_card_rules(db: &DatabaseConnection) -> Result<Vec<card_rule::Model>> {
    CardRule::find()
        .filter(card_rule::Column::Active.eq(true))
        .order_by_asc(card_rule::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates a new card rule with the specified billing cycle, performing
/// input validation.
///
/// The name must be non-empty and unique across all rules (active or not),
/// and both days must fall in 1-31. Whitespace around the name is trimmed.
pub async fn create_card_rule(
    db: &DatabaseConnection,
    name: String,
    closing_day: i32,
    due_day: i32,
) -> Result<card_rule::Model> {
    // Validate inputs
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(Error::Config {
            message: "Card rule name cannot be empty".to_string(),
        });
    }

    if !(1..=31).contains(&closing_day) {
        return Err(Error::Config {
            message: format!("Closing day must be between 1 and 31, got {closing_day}"),
        });
    }

    if !(1..=31).contains(&due_day) {
        return Err(Error::Config {
            message: format!("Due day must be between 1 and 31, got {due_day}"),
        });
    }

    // Names are the join key between expenses and rules, so duplicates
    // would make the scheduler lookup ambiguous
    if find_card_rule(db, &name).await?.is_some() {
        return Err(Error::Config {
            message: format!("A card rule named '{name}' already exists"),
        });
    }

    let rule = card_rule::ActiveModel {
        name: Set(name),
        closing_day: Set(closing_day),
        due_day: Set(due_day),
        active: Set(true),
        ..Default::default()
    };

    let result = rule.insert(db).await?;
    Ok(result)
}

/// Toggles whether a card rule is offered for new entries.
///
/// Deactivating a rule hides it from entry forms without deleting it, so
/// already-scheduled installments keep their historical billing behavior.
pub async fn set_card_rule_active(
    db: &DatabaseConnection,
    rule_id: i64,
    active: bool,
) -> Result<card_rule::Model> {
    let rule = CardRule::find_by_id(rule_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::CardRuleNotFound {
            name: rule_id.to_string(),
        })?;

    let mut active_model: card_rule::ActiveModel = rule.into();
    active_model.active = Set(active);
    active_model.update(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_card_rule_validation() -> Result<()> {
        let db = setup_test_db().await?;

        // Empty name
        let result = create_card_rule(&db, String::new(), 5, 15).await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        // Whitespace-only name
        let result = create_card_rule(&db, "   ".to_string(), 5, 15).await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        // Closing day out of range
        let result = create_card_rule(&db, "Bad Closing".to_string(), 0, 15).await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        let result = create_card_rule(&db, "Bad Closing".to_string(), 32, 15).await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        // Due day out of range
        let result = create_card_rule(&db, "Bad Due".to_string(), 5, 0).await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_card_rule_integration() -> Result<()> {
        let db = setup_test_db().await?;

        let rule = create_card_rule(&db, "Nubank".to_string(), 5, 15).await?;

        assert_eq!(rule.name, "Nubank");
        assert_eq!(rule.closing_day, 5);
        assert_eq!(rule.due_day, 15);
        assert!(rule.active);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_card_rule_trims_name() -> Result<()> {
        let db = setup_test_db().await?;

        let rule = create_card_rule(&db, "  Visa Gold  ".to_string(), 10, 20).await?;
        assert_eq!(rule.name, "Visa Gold");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_card_rule_rejects_duplicate_name() -> Result<()> {
        let db = setup_test_db().await?;

        create_card_rule(&db, "Nubank".to_string(), 5, 15).await?;
        let result = create_card_rule(&db, "Nubank".to_string(), 10, 20).await;

        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        Ok(())
    }

    #[tokio::test]
    async fn test_find_card_rule_integration() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_test_card_rule(&db, "Nubank").await?;

        let found = find_card_rule(&db, "Nubank").await?;
        assert!(found.is_some());
        assert_eq!(found.unwrap().id, created.id);

        // Direct methods resolve to no rule
        let not_found = find_card_rule(&db, "Pix").await?;
        assert!(not_found.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_find_card_rule_resolves_inactive_rules() -> Result<()> {
        let db = setup_test_db().await?;

        let rule = create_test_card_rule(&db, "Old Card").await?;
        set_card_rule_active(&db, rule.id, false).await?;

        // Retired cards still resolve for historical purchases
        let found = find_card_rule(&db, "Old Card").await?;
        assert!(found.is_some());
        assert!(!found.unwrap().active);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_active_card_rules_filters_and_orders() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_card_rule(&db, "Visa").await?;
        create_test_card_rule(&db, "Amex").await?;
        let retired = create_test_card_rule(&db, "Old Card").await?;
        set_card_rule_active(&db, retired.id, false).await?;

        let active = get_active_card_rules(&db).await?;
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].name, "Amex");
        assert_eq!(active[1].name, "Visa");

        Ok(())
    }

    #[tokio::test]
    async fn test_set_card_rule_active_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = set_card_rule_active(&db, 999, false).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::CardRuleNotFound { name: _ }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_set_card_rule_active_round_trip() -> Result<()> {
        let db = setup_test_db().await?;

        let rule = create_test_card_rule(&db, "Nubank").await?;
        assert!(rule.active);

        let deactivated = set_card_rule_active(&db, rule.id, false).await?;
        assert!(!deactivated.active);

        let reactivated = set_card_rule_active(&db, rule.id, true).await?;
        assert!(reactivated.active);

        Ok(())
    }
}
