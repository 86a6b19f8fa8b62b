use songsearch_fetch::{FetchError, Fetcher, FetcherConfig};
use songsearch_protocol as proto;
use tracing::{debug, error};
use wasm_bindgen::prelude::*;
use yew::prelude::*;

struct Model {
    items: Vec<proto::SearchResultItem>,
}

enum Msg {
    SearchResult {
        result: Result<Vec<proto::SearchResultItem>, FetchError>,
    },
}

impl Model {
    // A failed fetch leaves whatever is on screen. Returns whether to re-render.
    fn apply(&mut self, result: Result<Vec<proto::SearchResultItem>, FetchError>) -> bool {
        match result {
            Err(error) => {
                // the fetcher already logged it
                debug!(message = "keeping previous results", kind = error.kind());
                false
            }
            Ok(items) => {
                self.items = items;
                true
            }
        }
    }
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = FetcherConfig::default();
        match Fetcher::new(&config) {
            Ok(fetcher) => {
                ctx.link().send_future(async move {
                    let result = fetcher.fetch(&config.term).await;
                    Msg::SearchResult { result }
                });
            }
            Err(error) => {
                error!(message = "cannot create fetcher", error = %error.describe());
            }
        }
        Self { items: Vec::new() }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SearchResult { result } => self.apply(result),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <ul style="list-style: none; margin: 0; padding: 0 10px; height: 100vh; overflow-y: auto;">
                { for self.items.iter().map(view_item) }
            </ul>
        }
    }
}

fn view_item(item: &proto::SearchResultItem) -> Html {
    html! {
        <li key={item.track_id.to_string()} style="padding: 6px 0;">
            <div style="font-weight: bold;">{ item.track_name.clone() }</div>
            <div>{ item.collection_name.clone() }</div>
        </li>
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    tracing_wasm::set_as_global_default();

    yew::start_app::<Model>();
}
