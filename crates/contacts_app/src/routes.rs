use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    Form,
};
use contacts_core::Location;
use contacts_engine::{ContactChanges, Loader};
use contacts_logging::contacts_info;
use serde::Deserialize;

use crate::views::{sidebar, ContactPage, EditPage, IndexPage};
use crate::{AppContext, AppError};

type Ctx = State<Arc<AppContext>>;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    first: Option<String>,
    #[serde(default)]
    last: Option<String>,
    #[serde(default)]
    avatar: Option<String>,
    #[serde(default)]
    twitter: Option<String>,
    #[serde(default)]
    notes: Option<String>,
}

impl From<ContactForm> for ContactChanges {
    fn from(form: ContactForm) -> Self {
        ContactChanges {
            first: form.first,
            last: form.last,
            avatar: form.avatar,
            twitter: form.twitter,
            notes: form.notes,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FavoriteForm {
    favorite: String,
}

fn contact_location(id: &str, suffix: &str, params: SearchParams) -> Location {
    Location::with_query(format!("/contacts/{id}{suffix}"), params.q)
}

pub async fn index(
    State(ctx): Ctx,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, AppError> {
    let data = ctx.loader().load(&Location::with_query("/", params.q)).await?;
    let page = IndexPage {
        sidebar: sidebar(data.location, data.contacts),
    };
    Ok(Html(page.render()?))
}

/// Creates a blank contact and sends the browser to its edit form.
pub async fn create_contact(State(ctx): Ctx) -> Result<Redirect, AppError> {
    let id = ctx.mutate(|store| Ok(store.create_blank_contact()))?;
    contacts_info!("created contact {}", id);
    Ok(Redirect::to(&format!("/contacts/{id}/edit")))
}

pub async fn show_contact(
    State(ctx): Ctx,
    Path(id): Path<String>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, AppError> {
    let data = ctx.loader().load(&contact_location(&id, "", params)).await?;
    let contact = ctx.read(|store| store.get(&id).cloned())?;
    let page = ContactPage::new(sidebar(data.location, data.contacts), contact);
    Ok(Html(page.render()?))
}

pub async fn edit_contact(
    State(ctx): Ctx,
    Path(id): Path<String>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, AppError> {
    let data = ctx
        .loader()
        .load(&contact_location(&id, "/edit", params))
        .await?;
    let contact = ctx.read(|store| store.get(&id).cloned())?;
    let page = EditPage::new(sidebar(data.location, data.contacts), contact);
    Ok(Html(page.render()?))
}

pub async fn update_contact(
    State(ctx): Ctx,
    Path(id): Path<String>,
    Form(form): Form<ContactForm>,
) -> Result<Redirect, AppError> {
    ctx.mutate(|store| store.update(&id, form.into()).map(|_| ()))?;
    contacts_info!("updated contact {}", id);
    Ok(Redirect::to(&format!("/contacts/{id}")))
}

pub async fn destroy_contact(
    State(ctx): Ctx,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    ctx.mutate(|store| store.delete(&id))?;
    contacts_info!("deleted contact {}", id);
    Ok(Redirect::to("/"))
}

pub async fn favorite_contact(
    State(ctx): Ctx,
    Path(id): Path<String>,
    Form(form): Form<FavoriteForm>,
) -> Result<Redirect, AppError> {
    let favorite = form.favorite == "true";
    ctx.mutate(|store| store.set_favorite(&id, favorite))?;
    Ok(Redirect::to(&format!("/contacts/{id}")))
}
