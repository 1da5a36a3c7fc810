use crate::app::App;
use crate::domain::expansion::ExpansionState;
use crate::domain::pager::Pager;
use crate::errors::ServerError;
use crate::responses::{html_response, ResultResp};
use crate::templates::pages::{self, PropertiesVm};
use astra::Request;
use std::collections::HashMap;
use url::form_urlencoded;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => home(app),
        ("GET", "/sidebar-grid") | ("GET", "/properties") => property_grid(&req, app),
        ("GET", "/register") => html_response(pages::register_page()),
        ("POST", "/register") => Err(ServerError::BadRequest(
            "Registration is not open yet".to_string(),
        )),
        _ => Err(ServerError::NotFound),
    }
}

fn home(app: &App) -> ResultResp {
    let listings = app.fetch_view_models(app.config.home_fetch_size);
    html_response(pages::home_page(&listings))
}

fn property_grid(req: &Request, app: &App) -> ResultResp {
    let params = parse_query(req);
    let listings = app.fetch_view_models(app.config.grid_fetch_size);

    let mut pager = Pager::new(listings.len(), app.config.grid_items_per_page);
    // Unparseable or out-of-range pages leave us on page 1.
    if let Some(requested) = params.get("page").and_then(|p| p.trim().parse::<i64>().ok()) {
        pager.go_to(requested);
    }

    let policy = app.config.expansion_policy;
    let expansion = params
        .get("expanded")
        .map(|raw| ExpansionState::from_query(policy, raw))
        .unwrap_or_else(|| ExpansionState::new(policy));

    let vm = PropertiesVm {
        listings: &listings[pager.page_range()],
        pager: pager.state(),
        expansion: &expansion,
    };

    html_response(pages::properties_page(&vm))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
