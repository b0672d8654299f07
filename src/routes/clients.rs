use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use log::error;
use tera::Tera;

use crate::db::DbPool;
use crate::forms::client::ClientFilterForm;
use crate::models::auth::AuthenticatedOperator;
use crate::repository::client::DieselClientRepository;
use crate::routes::{base_context, render_template};
use crate::services::client as client_service;

#[get("/dashboard")]
pub async fn dashboard(
    user: AuthenticatedOperator,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, "dashboard");
    context.insert("current_user", &user);

    render_template(&tera, "dashboard.html", &context)
}

#[get("/clienti")]
pub async fn show_clients(
    user: AuthenticatedOperator,
    pool: web::Data<DbPool>,
    params: web::Query<ClientFilterForm>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let form = params.into_inner();

    let mut context = base_context(&flash_messages, "clienti");
    context.insert("current_user", &user);
    context.insert("filtro", form.filtro.as_deref().unwrap_or(""));
    context.insert("tutte", &form.tutte);
    context.insert("q", form.q.as_deref().unwrap_or(""));
    context.insert("ovunque", &form.ovunque);

    let repo = DieselClientRepository::new(&pool);
    let clients = match client_service::list_clients(&repo, form.into()) {
        Ok(clients) => clients,
        Err(e) => {
            // Presentation policy: a backend failure degrades to an empty
            // listing with a notice, the error itself stays in the log.
            error!("Failed to list clients: {e}");
            context.insert("load_error", &true);
            Vec::new()
        }
    };
    context.insert("clients", &clients);

    render_template(&tera, "clients.html", &context)
}
