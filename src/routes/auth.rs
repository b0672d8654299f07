use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use tera::Tera;

use crate::db::DbPool;
use crate::forms::auth::LoginForm;
use crate::models::auth::AuthenticatedOperator;
use crate::repository::operator::DieselOperatorRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::auth as auth_service;

#[get("/")]
pub async fn login_page(
    user: Option<Identity>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if user.is_some() {
        return redirect("/dashboard");
    }

    let context = base_context(&flash_messages, "login");
    render_template(&tera, "login.html", &context)
}

#[post("/")]
pub async fn login(
    request: HttpRequest,
    pool: web::Data<DbPool>,
    web::Form(form): web::Form<LoginForm>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let username = form.username.trim();
    let password = form.password.trim();

    if username.is_empty() || password.is_empty() {
        FlashMessage::error("Inserisci nome utente e password.").send();
        return redirect("/");
    }

    let repo = DieselOperatorRepository::new(&pool);
    match auth_service::authenticate(&repo, username, password) {
        Ok(operator) => {
            let session_operator = AuthenticatedOperator::from(&operator);
            let payload = match serde_json::to_string(&session_operator) {
                Ok(payload) => payload,
                Err(e) => {
                    error!("Failed to serialize the session identity: {e}");
                    return HttpResponse::InternalServerError().finish();
                }
            };
            if let Err(e) = Identity::login(&request.extensions(), payload) {
                error!("Failed to attach the session identity: {e}");
                return HttpResponse::InternalServerError().finish();
            }

            FlashMessage::success("Accesso eseguito con successo.").send();
            redirect("/dashboard")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Credenziali non valide.").send();
            redirect("/")
        }
        Err(e) => {
            error!("Failed to verify credentials for '{username}': {e}");

            // The credential store is unreachable; render the login page
            // with the outage notice instead of rejecting the credentials.
            let mut context = base_context(&flash_messages, "login");
            context.insert(
                "alerts",
                &[(
                    "Servizio di autenticazione momentaneamente non disponibile.",
                    "danger",
                )],
            );
            match tera.render("login.html", &context) {
                Ok(body) => HttpResponse::ServiceUnavailable()
                    .content_type("text/html; charset=utf-8")
                    .body(body),
                Err(e) => {
                    error!("Failed to render template 'login.html': {e}");
                    HttpResponse::InternalServerError().finish()
                }
            }
        }
    }
}

#[get("/logout")]
pub async fn logout(user: Identity) -> impl Responder {
    user.logout();
    FlashMessage::info("Sei stato disconnesso.").send();
    redirect("/")
}
