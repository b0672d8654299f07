use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use tera::Tera;

use crate::db::DbPool;
use crate::models::auth::AuthenticatedOperator;
use crate::repository::client::DieselClientRepository;
use crate::repository::order::DieselOrderRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::client as client_service;
use crate::services::order as order_service;

#[get("/clienti/{rifconto}/ordini")]
pub async fn show_orders(
    path: web::Path<String>,
    user: AuthenticatedOperator,
    pool: web::Data<DbPool>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let account_ref = path.into_inner();

    let client_repo = DieselClientRepository::new(&pool);
    let client_name = match client_service::client_display_name(&client_repo, &account_ref) {
        Ok(Some(name)) => name,
        Ok(None) => {
            FlashMessage::error("Cliente non trovato.").send();
            return redirect("/clienti");
        }
        Err(e) => {
            error!("Failed to resolve client '{account_ref}': {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let order_repo = DieselOrderRepository::new(&pool);
    let orders = match order_service::list_orders(&order_repo, &account_ref) {
        Ok(orders) => orders,
        Err(e) => {
            error!("Failed to list orders for client '{account_ref}': {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, "ordini");
    context.insert("current_user", &user);
    context.insert("client_name", &client_name);
    context.insert("account_ref", &account_ref);
    context.insert("orders", &orders);

    render_template(&tera, "orders.html", &context)
}

#[get("/clienti/{rifconto}/ordini/{numdoc}")]
pub async fn show_order_lines(
    path: web::Path<(String, i32)>,
    user: AuthenticatedOperator,
    pool: web::Data<DbPool>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let (account_ref, document_number) = path.into_inner();

    let order_repo = DieselOrderRepository::new(&pool);
    let lines = match order_service::list_order_lines(&order_repo, &account_ref, document_number) {
        Ok(lines) => lines,
        Err(e) => {
            error!(
                "Failed to list lines of order '{document_number}' for client '{account_ref}': {e}"
            );
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, "ordini");
    context.insert("current_user", &user);
    context.insert("account_ref", &account_ref);
    context.insert("document_number", &document_number);
    context.insert("lines", &lines);

    render_template(&tera, "order_lines.html", &context)
}
