/// OpsDesk Web Admin Interface Server
///
/// Axum-based server that serves the Leptos web application with SSR support.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use axum::Router;
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use opsdesk_web::app::*;
    use tower_http::services::ServeDir;

    // Reads cargo-leptos's LEPTOS_* environment (site address, site root)
    let conf = get_configuration(None).await?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, App)
        .fallback_service(ServeDir::new(leptos_options.site_root.clone()))
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    println!("OpsDesk admin listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for the hydration entry point
}
