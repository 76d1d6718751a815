use maud::{html, Markup, DOCTYPE};

pub fn base(title: &str, app_name: &str, base_url: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="theme-color" content="#4F46E5";
                title { (title) " - " (app_name) }
                link rel="canonical" href={ (base_url) "/login" };

                link rel="stylesheet" href="/static/css/vocalink.css";
            }
            body {
                (content)
            }
        }
    }
}
