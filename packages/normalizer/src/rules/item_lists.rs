use crate::patterns::ITEM_DIV_RE;
use crate::rules::RewriteRule;
use regex::Match;
use std::borrow::Cow;

const ITEM_SEPARATOR: &str = "\n    ";

/// Turns runs of sibling `item` divs into a `<ul>` of `<li>`s
///
/// Items belong to the same run when only whitespace separates them. A match
/// ends at the first `</div>` after the opening tag, so an item holding a
/// nested div is left as written and splits the run around it.
pub struct ItemListsRule;

impl RewriteRule for ItemListsRule {
    fn name(&self) -> &'static str {
        "item-lists"
    }

    fn description(&self) -> &'static str {
        "Wrap consecutive item containers in ul/li"
    }

    fn rewrite<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let items: Vec<Match> = ITEM_DIV_RE
            .find_iter(text)
            .filter(|item| is_flat(item.as_str()))
            .collect();
        let runs = item_runs(text, &items);
        if runs.is_empty() {
            return Cow::Borrowed(text);
        }

        let mut out = String::with_capacity(text.len() + runs.len() * 16);
        let mut last = 0;
        for run in runs {
            let list_items: Vec<String> = run.iter().map(|item| to_list_item(item.as_str())).collect();
            out.push_str(&text[last..run[0].start()]);
            out.push_str("<ul>");
            out.push_str(ITEM_SEPARATOR);
            out.push_str(&list_items.join(ITEM_SEPARATOR));
            out.push_str("\n</ul>");
            last = run[run.len() - 1].end();
        }
        out.push_str(&text[last..]);
        Cow::Owned(out)
    }
}

/// Group whitespace-separated neighbours, keeping groups of two or more
fn item_runs<'t, 'm>(text: &str, items: &'m [Match<'t>]) -> Vec<&'m [Match<'t>]> {
    let mut runs = Vec::new();
    let mut start = 0;
    for index in 1..=items.len() {
        let continues = index < items.len()
            && text[items[index - 1].end()..items[index].start()].trim().is_empty();
        if !continues {
            if index - start >= 2 {
                runs.push(&items[start..index]);
            }
            start = index;
        }
    }
    runs
}

/// Whether the matched item has no nested div, so its `</div>` is its own
fn is_flat(item: &str) -> bool {
    let body = item.find('>').map_or(item, |end| &item[end + 1..]);
    !body.contains("<div")
}

fn to_list_item(item: &str) -> String {
    let body = item.strip_prefix("<div").unwrap_or(item);
    let body = body.strip_suffix("</div>").unwrap_or(body);
    format!("<li{}</li>", body)
}
