use super::with_store;
use crate::services::store::SharedStore;
use warp::Filter;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

pub fn page_handler(
    store: SharedStore,
) -> impl warp::Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path::end()
        .and(warp::get())
        .and(with_store(store))
        .map(|store: SharedStore| {
            log::debug!("Received request for index page");
            warp::reply::html(render_index(store.catalog()))
        })
}

pub fn render_index(catalog: &[String]) -> String {
    let options: String = catalog
        .iter()
        .map(|product| {
            let product = escape_html(product);
            format!(
                "            <option value=\"{}\">{}</option>\n",
                product, product
            )
        })
        .collect();
    INDEX_TEMPLATE.replace("{{ products }}", &options)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
