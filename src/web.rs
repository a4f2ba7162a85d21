//! Web application.

use poem::listener::TcpListener;
use poem::{get, EndpointExt, Response, Route, Server};

use crate::config::Config;
use crate::opts::Opts;
use crate::passkit::Client;
use crate::prelude::*;

mod middleware;
mod partials;
mod simulation;
#[cfg(test)]
mod test;
mod views;

pub async fn run(opts: &Opts, config: Config) -> Result {
    let addr = format!("{}:{}", opts.host, opts.port);
    let client = Client::new(&config);
    let app = create_app().data(client).data(config);
    info!(%addr, "listening");
    Server::new(TcpListener::bind(addr)).run(app).await?;
    Ok(())
}

/// Builds the route table with the middleware attached.
///
/// `Config` and `Client` are injected by the caller, which keeps the
/// application testable against a stub upstream.
pub fn create_app() -> impl poem::Endpoint<Output = Response> {
    Route::new()
        .at("/", get(views::templates::get_list))
        .at("/template/:template_id", get(views::template::get))
        .at("/template/:template_id/delete", get(views::template::delete))
        .at("/template/:template_id/pass", get(views::pass::create))
        .at("/passes", get(views::passes::get_list))
        .at("/pass/:pass_id", get(views::pass::get))
        .at("/pass/:pass_id/update", get(views::pass::update))
        .at("/pass/:pass_id/delete", get(views::pass::delete))
        .at("/errors", get(views::errors::get_log))
        .at("/errors/:error_type", get(views::errors::get_simulate))
        .at("/settings", get(views::settings::get))
        .at("/favicon.ico", get(views::r#static::get_favicon))
        .at("/theme.css", get(views::r#static::get_theme_css))
        .at("/robots.txt", get(views::r#static::get_robots_txt))
        .with(middleware::timeit::TimeItMiddleware)
        .with(middleware::error::ErrorMiddleware)
        .with(middleware::security_headers::SecurityHeaders)
}
