use courtside_core::{PageView, PlayerRecord, RoleRecord, RosterStats};

/// Render the roster page the way the admin table lays it out.
pub fn roster_table(view: &PageView<'_, PlayerRecord>) -> String {
    let mut out = String::new();

    let name_width = column_width(view.records().iter().map(|p| p.name()), 4);
    let contact_width = column_width(view.records().iter().map(|p| p.contact().as_str()), 7);

    out.push_str(&format!(
        "    CODE    {:<name_width$}  {:<contact_width$}  JOINED      STATUS\n",
        "NAME", "CONTACT",
    ));

    for player in view.records() {
        out.push_str(&format!(
            "{:<2}  {:<6}  {:<name_width$}  {:<contact_width$}  {}  {}\n",
            player.avatar_initials(),
            player.id(),
            player.name(),
            player.contact().as_str(),
            player.joined().format("%Y-%m-%d"),
            player.status(),
        ));
    }

    out.push_str(&footer(view.display_range(), view.page(), view.page_count()));
    out
}

/// Render the role directory page.
pub fn roles_table(view: &PageView<'_, RoleRecord>) -> String {
    let mut out = String::new();

    let name_width = column_width(view.records().iter().map(|r| r.name()), 4);

    out.push_str(&format!(
        "ID  {:<name_width$}  USERS  DESCRIPTION\n",
        "NAME",
    ));

    for role in view.records() {
        out.push_str(&format!(
            "{:<2}  {:<name_width$}  {:>5}  {}\n",
            role.id(),
            role.name(),
            role.user_count(),
            role.description(),
        ));
    }

    out.push_str(&footer(view.display_range(), view.page(), view.page_count()));
    out
}

/// Header cards: total, active, new this period.
pub fn stats_line(stats: &RosterStats) -> String {
    format!(
        "members: {}  active: {}  new this period: {}\n",
        stats.total, stats.active, stats.new_this_period,
    )
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, min: usize) -> usize {
    values.map(str::len).max().unwrap_or(0).max(min)
}

fn footer(range: String, page: usize, page_count: usize) -> String {
    format!("{}  (page {}/{})\n", range, page, page_count)
}
