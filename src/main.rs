#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use devops_portfolio::app::*;
    use devops_portfolio::portfolio::PortfolioConfig;
    use devops_portfolio::server::middleware;
    use leptos::logging;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};

    let conf = get_configuration(None).unwrap();
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    // Page behavior tuning, handed to the browser inside the rendered shell
    let portfolio = match std::env::var("PORTFOLIO_CONFIG") {
        Ok(path) => PortfolioConfig::from_file(&path)
            .unwrap_or_else(|e| panic!("Couldn't load {path}: {e}")),
        Err(_) => PortfolioConfig::default(),
    };

    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(portfolio.clone()),
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(middleware())
        .with_state(leptos_options);

    logging::log!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
