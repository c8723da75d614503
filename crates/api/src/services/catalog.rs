//! Card catalog: direct admin creation, edits, deletion, and listing.

use std::collections::BTreeMap;
use std::sync::Arc;

use cardforge_core::cards::{
    form_variant_name, normalize_search, parse_form_filter, CardDraft, CardForm,
};
use cardforge_core::error::CoreError;
use cardforge_core::pagination::{clamp_limit, clamp_offset, CARD_LIST_LIMIT};
use cardforge_core::roles::{authorize, Principal, Role};
use cardforge_core::submissions::optional_text;
use cardforge_core::types::DbId;
use cardforge_db::models::card::{Card, CardListParams, CreateCard, UpdateCard};
use cardforge_db::repositories::CardRepo;
use cardforge_db::DbPool;
use cardforge_events::notice::EVENT_CARD_CREATED;
use cardforge_events::{dispatch, CardNotice, Notifier};
use serde::Deserialize;

use crate::error::AppResult;

/// Input for [`create_forms`]: one image per form to create.
#[derive(Debug, Clone, Deserialize)]
pub struct CardFormsDraft {
    #[serde(default)]
    pub name: String,
    /// Form name (`base`, `awakened`, `event`) to image URL.
    #[serde(default)]
    pub images: BTreeMap<String, String>,
    pub series: Option<String>,
    pub description: Option<String>,
}

fn announce(notifier: &Arc<dyn Notifier>, card: &Card) {
    let notice = CardNotice::new(
        EVENT_CARD_CREATED,
        card.id,
        card.character_name.clone(),
        card.form.clone(),
        card.image_url.clone(),
    )
    .with_series(card.series.clone())
    .with_event_name(card.event_name.clone());
    dispatch(Arc::clone(notifier), notice);
}

/// Insert an unowned, approved catalog card. Duplicate names are allowed.
pub async fn create(
    pool: &DbPool,
    notifier: &Arc<dyn Notifier>,
    principal: Option<&Principal>,
    draft: &CardDraft,
) -> AppResult<Card> {
    let principal = authorize(principal, Role::Admin)?;
    let form = draft.check()?;

    let input = CreateCard {
        character_name: draft.name.trim().to_string(),
        form,
        image_url: draft.image_url.trim().to_string(),
        series: optional_text(draft.series.as_deref()),
        event_name: optional_text(draft.event_name.as_deref()),
        description: optional_text(draft.description.as_deref()),
        approved: true,
    };
    let card = CardRepo::create(pool, &input).await?;

    tracing::info!(
        card_id = card.id,
        form = %card.form,
        admin = %principal.username,
        "Card created",
    );
    announce(notifier, &card);
    Ok(card)
}

/// Insert one card per supplied form, named `"{name} ({Form})"`.
///
/// All rows are written in one transaction. Blank image entries are skipped;
/// at least one form must remain.
pub async fn create_forms(
    pool: &DbPool,
    principal: Option<&Principal>,
    draft: &CardFormsDraft,
) -> AppResult<Vec<Card>> {
    let principal = authorize(principal, Role::Admin)?;

    let name = draft.name.trim();
    if name.is_empty() {
        return Err(CoreError::validation("name", "must not be blank").into());
    }

    let mut images: BTreeMap<CardForm, String> = BTreeMap::new();
    for (form, url) in &draft.images {
        let form: CardForm = form
            .parse()
            .map_err(|_| CoreError::validation("images", format!("unknown form '{form}'")))?;
        let url = url.trim();
        if !url.is_empty() {
            images.insert(form, url.to_string());
        }
    }
    if images.is_empty() {
        return Err(CoreError::validation("images", "at least one form image is required").into());
    }

    let series = optional_text(draft.series.as_deref());
    let description = optional_text(draft.description.as_deref());
    let inputs: Vec<CreateCard> = images
        .into_iter()
        .map(|(form, image_url)| CreateCard {
            character_name: form_variant_name(name, form),
            form,
            image_url,
            series: series.clone(),
            event_name: None,
            description: description.clone(),
            approved: true,
        })
        .collect();

    let cards = CardRepo::create_many(pool, &inputs).await?;

    tracing::info!(
        count = cards.len(),
        card_name = name,
        admin = %principal.username,
        "Card forms created",
    );
    Ok(cards)
}

/// Fetch a single card.
pub async fn get(pool: &DbPool, principal: Option<&Principal>, card_id: DbId) -> AppResult<Card> {
    authorize(principal, Role::Admin)?;
    let card = CardRepo::find_by_id(pool, card_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Card", card_id))?;
    Ok(card)
}

/// Overwrite the supplied fields of a card.
pub async fn update(
    pool: &DbPool,
    principal: Option<&Principal>,
    card_id: DbId,
    fields: &UpdateCard,
) -> AppResult<Card> {
    let principal = authorize(principal, Role::Admin)?;
    let input = normalize_update(fields)?;

    let card = CardRepo::update(pool, card_id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Card", card_id))?;

    tracing::info!(card_id, admin = %principal.username, "Card updated");
    Ok(card)
}

/// Validate and trim an edit. Supplied name and image must be non-blank;
/// a supplied form must be known and is stored in canonical spelling.
/// Blank optional text is treated as not supplied, as on create.
fn normalize_update(fields: &UpdateCard) -> Result<UpdateCard, CoreError> {
    let required = |field: &str, value: &Option<String>| -> Result<Option<String>, CoreError> {
        match value.as_deref().map(str::trim) {
            Some("") => Err(CoreError::validation(field, "must not be blank")),
            other => Ok(other.map(str::to_string)),
        }
    };

    let form = match fields.form.as_deref() {
        Some(raw) => Some(raw.parse::<CardForm>()?.as_str().to_string()),
        None => None,
    };

    Ok(UpdateCard {
        character_name: required("character_name", &fields.character_name)?,
        form,
        image_url: required("image_url", &fields.image_url)?,
        series: optional_text(fields.series.as_deref()),
        event_name: optional_text(fields.event_name.as_deref()),
        description: optional_text(fields.description.as_deref()),
    })
}

/// Hard-delete a card. Any ownership goes with it.
pub async fn delete(pool: &DbPool, principal: Option<&Principal>, card_id: DbId) -> AppResult<()> {
    let principal = authorize(principal, Role::Admin)?;
    if !CardRepo::delete(pool, card_id).await? {
        return Err(CoreError::not_found("Card", card_id).into());
    }
    tracing::info!(card_id, admin = %principal.username, "Card deleted");
    Ok(())
}

/// Catalog listing, newest first, capped at [`CARD_LIST_LIMIT`].
///
/// `form` accepts a form name or `all`; `search` is a case-insensitive
/// substring of the card name. Both combine by conjunction.
pub async fn list(
    pool: &DbPool,
    principal: Option<&Principal>,
    form: Option<&str>,
    search: Option<&str>,
    limit: Option<i64>,
    offset: Option<i64>,
) -> AppResult<Vec<Card>> {
    authorize(principal, Role::Admin)?;
    let params = CardListParams {
        form: parse_form_filter(form)?,
        search: normalize_search(search),
        limit: clamp_limit(limit, CARD_LIST_LIMIT, CARD_LIST_LIMIT),
        offset: clamp_offset(offset),
    };
    Ok(CardRepo::list(pool, &params).await?)
}
