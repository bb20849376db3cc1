use std::sync::Mutex;

use actix_files::Files;
use actix_web::{middleware, web, App, HttpResponse, HttpServer, Result};
use log::{debug, info};

use crate::export::timetable_csv;
use crate::form::{self, DraftFieldRequest, RenameDayRequest, SelectSlotRequest};
use crate::schedule::ScheduleEditor;
use crate::theme;
use crate::view::editor_view;

// In-memory storage: one grid behind one lock. Every mutation responds
// with the fresh view so clients never need a second round trip.
pub struct AppState {
    pub editor: Mutex<ScheduleEditor>,
}

fn bad_request(error: String) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": error }))
}

// Grid state endpoint
async fn grid(state: web::Data<AppState>) -> Result<HttpResponse> {
    let editor = state.editor.lock().unwrap();
    Ok(HttpResponse::Ok().json(editor_view(&editor)))
}

// Slot selection endpoint
async fn select_slot(
    req: web::Json<SelectSlotRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let mut editor = state.editor.lock().unwrap();
    if let Err(error) = form::validate_select(&req, editor.config()) {
        return Ok(bad_request(error));
    }
    editor.select_slot(req.day, req.hour);
    Ok(HttpResponse::Ok().json(editor_view(&editor)))
}

// Draft field endpoint
async fn update_draft(
    req: web::Json<DraftFieldRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let mut editor = state.editor.lock().unwrap();
    if let Err(error) = form::validate_draft_field(&req, editor.config()) {
        return Ok(bad_request(error));
    }
    let DraftFieldRequest { field, value } = req.into_inner();
    editor.update_draft_field(field, value);
    Ok(HttpResponse::Ok().json(editor_view(&editor)))
}

async fn save(state: web::Data<AppState>) -> Result<HttpResponse> {
    let mut editor = state.editor.lock().unwrap();
    if !editor.save() {
        debug!("save request ignored: no selection or blank title");
    }
    Ok(HttpResponse::Ok().json(editor_view(&editor)))
}

async fn delete_selected(state: web::Data<AppState>) -> Result<HttpResponse> {
    let mut editor = state.editor.lock().unwrap();
    editor.delete_selected();
    Ok(HttpResponse::Ok().json(editor_view(&editor)))
}

async fn cancel_edit(state: web::Data<AppState>) -> Result<HttpResponse> {
    let mut editor = state.editor.lock().unwrap();
    editor.cancel_edit();
    Ok(HttpResponse::Ok().json(editor_view(&editor)))
}

// Day rename endpoint
async fn rename_day(
    req: web::Json<RenameDayRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let mut editor = state.editor.lock().unwrap();
    if let Err(error) = form::validate_rename(&req, editor.config()) {
        return Ok(bad_request(error));
    }
    let RenameDayRequest { id, name } = req.into_inner();
    editor.rename_day(id, name);
    Ok(HttpResponse::Ok().json(editor_view(&editor)))
}

async fn clear_all(state: web::Data<AppState>) -> Result<HttpResponse> {
    let mut editor = state.editor.lock().unwrap();
    editor.clear_all();
    Ok(HttpResponse::Ok().json(editor_view(&editor)))
}

// CSV download endpoint
async fn export_csv(state: web::Data<AppState>) -> Result<HttpResponse> {
    let editor = state.editor.lock().unwrap();
    let csv = timetable_csv(&editor).map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!("Failed to export CSV: {}", e))
    })?;
    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"timetable.csv\"",
        ))
        .body(csv))
}

// HTML page handlers
async fn index() -> Result<HttpResponse> {
    let html = include_str!("../templates/index.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

async fn editor_page(path: web::Path<String>) -> Result<HttpResponse> {
    let slug = path.into_inner();
    let theme = match theme::by_slug(&slug) {
        Some(theme) => theme,
        None => {
            return Ok(HttpResponse::NotFound()
                .json(serde_json::json!({ "error": format!("Unknown theme: {}", slug) })));
        }
    };
    let html = include_str!("../templates/editor.html")
        .replace("{{THEME_NAME}}", theme.name)
        .replace("{{THEME_CSS}}", theme.stylesheet)
        .replace("{{THEME_SLUG}}", theme.slug);
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/editor/{theme}", web::get().to(editor_page))
        .route("/api/grid", web::get().to(grid))
        .route("/api/slot/select", web::post().to(select_slot))
        .route("/api/draft", web::post().to(update_draft))
        .route("/api/save", web::post().to(save))
        .route("/api/delete", web::post().to(delete_selected))
        .route("/api/cancel", web::post().to(cancel_edit))
        .route("/api/day/rename", web::post().to(rename_day))
        .route("/api/clear", web::post().to(clear_all))
        .route("/api/export.csv", web::get().to(export_csv));
}

pub async fn start_server(port: u16, editor: ScheduleEditor) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState {
        editor: Mutex::new(editor),
    });

    info!("listening on 0.0.0.0:{}", port);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .service(Files::new("/static", "static"))
            .configure(routes)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
