use colored::Colorize;
use inkwell_application::Page;
use inkwell_core::blog::BlogRecord;
use inkwell_core::collection::CollectionSnapshot;
use inkwell_core::nav::{self, NavItem};
use inkwell_core::notice::Notice;

pub fn print_nav(items: &[NavItem]) {
    let labels: Vec<String> = items
        .iter()
        .map(|item| match item {
            NavItem::Link { label, route } => format!("{} ({})", label, route),
            NavItem::Logout => "Logout".to_string(),
        })
        .collect();
    println!("{}", labels.join(" | "));
}

/// Text for a notice. Alerts carry a prefix so they read apart from the
/// inline messages around them.
pub fn notice_line(notice: Notice) -> String {
    if notice.is_alert() {
        format!("Alert: {}", notice.message())
    } else {
        notice.message().to_string()
    }
}

pub fn print_notice(notice: Notice) {
    let line = notice_line(notice);
    if notice.is_alert() {
        eprintln!("{}", line.red().bold());
    } else if notice.is_error() {
        eprintln!("{}", line.yellow());
    } else {
        println!("{}", line.green());
    }
}

pub fn print_record(record: &BlogRecord) {
    let category = record
        .category
        .map(|c| c.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!("[{}] {} ({})", record.id, record.title, category);
    if !record.author.is_empty() {
        println!("  by {}", record.author);
    }
    for line in record.content.lines() {
        println!("  {}", line);
    }
}

pub fn print_snapshot(title: &str, snapshot: &CollectionSnapshot, empty: Option<&str>) {
    println!("{}", title);
    if let Some(notice) = snapshot.last_error {
        print_notice(notice);
    }
    if let Some(message) = empty {
        println!("{}", message);
        return;
    }
    for record in &snapshot.records {
        print_record(record);
    }
}

/// Renders whatever page a navigation produced.
pub async fn print_page(page: &Page) {
    match page {
        Page::Auth(auth) => {
            println!("Not signed in. Run `inkwell login` or `inkwell signup`.");
            if let Some(notice) = auth.form.error() {
                print_notice(notice);
            }
        }
        Page::Feed(feed) => {
            print_snapshot(nav::BRAND, &feed.snapshot().await, feed.empty_message().await)
        }
        Page::MyBlogs(mine) => {
            print_snapshot("My Blogs", &mine.snapshot().await, mine.empty_message().await)
        }
        Page::NotFound(path) => eprintln!("No page at {}", path),
    }
}
