//! Trimmed copies of the site's page layouts used by the decoder tests.

pub const CHARACTER_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>Miracle 74 - Characters</title></head>
<body>
<div id="ContentBox">
<div class="TableContainer">
  <div class="CaptionContainer"><div class="Text">Character Information</div></div>
  <table class="TableContent InnerBorder" id="info" width="100%">
    <tr class="Odd"><td class="LabelV">Name:</td><td><img src="https://static.miracle74.com/images/flags/br.gif"> Bubble<br>
<span class="Former">(formerly Bob)</span></td></tr>
    <tr class="Even"><td class="LabelV">Sex:</td><td>male</td></tr>
    <tr class="Odd"><td class="LabelV">Vocation:</td><td>Elite Knight</td></tr>
    <tr class="Even"><td class="LabelV">Level:</td><td>120</td></tr>
    <tr class="Odd"><td class="LabelV">Residence:</td><td>Thais</td></tr>
    <tr class="Even"><td class="LabelV">Guild&nbsp;Membership:</td><td>Leader of the <a href="?subtopic=guilds&amp;action=show&amp;guild=42">Dragons</a></td></tr>
    <tr class="Odd"><td class="LabelV">Last login:</td><td>14&nbsp;October&nbsp;2026, 3:04&nbsp;pm</td></tr>
    <tr class="Even"><td class="LabelV">Comment:</td><td>Level: 9000</td></tr>
    <tr class="Odd"><td class="LabelV">Account&nbsp;Status:</td><td>Premium Account</td></tr>
  </table>
</div>
<div class="TableContainer">
  <div class="CaptionContainer"><div class="Text">Character Deaths</div></div>
  <table class="TableContent InnerBorder" id="deaths" width="100%">
    <tr class="Odd"><td width="25%">14&nbsp;October&nbsp;2026, 2:10&nbsp;pm</td><td>Died at Level 118 by a dragon lord.</td></tr>
    <tr class="Even"><td>13&nbsp;October&nbsp;2026, 9:00&nbsp;am</td><td>Killed at Level 117 by <a href="?subtopic=characters&amp;name=Bob">Bob</a> and a demon.</td></tr>
    <tr class="Odd"><td>12&nbsp;October&nbsp;2026, 1:00&nbsp;am</td><td>Died by a bug.</td></tr>
    <tr class="Even"><td></td><td></td></tr>
  </table>
</div>
<div class="TableContainer">
  <div class="CaptionContainer"><div class="Text">Account Information</div></div>
  <table class="TableContent InnerBorder" id="account" width="100%">
    <tr class="Odd"><td>Created:</td><td>1 January 2020, 1:00 pm</td></tr>
  </table>
</div>
</div>
</body></html>"#;

pub const CHARACTER_PAGE_NO_DEATHS: &str = r#"<!DOCTYPE html>
<html><head><title>Miracle 74 - Characters</title></head>
<body>
<div class="TableContainer">
  <div class="CaptionContainer"><div class="Text">Character Information</div></div>
  <table class="TableContent InnerBorder" width="100%">
    <tr><td>Name:</td><td>Lonely Druid</td></tr>
    <tr><td>Sex:</td><td>female</td></tr>
    <tr><td>Vocation:</td><td>Druid</td></tr>
    <tr><td>Level:</td><td>30</td></tr>
    <tr><td>Last login:</td><td>never</td></tr>
    <tr><td>Account&nbsp;Status:</td><td>Free Account</td></tr>
  </table>
</div>
</body></html>"#;

pub const CHARACTER_NOT_FOUND_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>Miracle 74</title></head>
<body>
<table width="100%"><tr><td>
  <div class="Box">Character <b>Nobody</b> does not exist.</div>
</td></tr></table>
</body></html>"#;

fn listing_page(header: &str, rows: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><title>Miracle 74</title></head>
<body>
<table class="TableContent InnerBorder" id="menu-decor"></table>
<div class="TableContainer">
  <table class="TableContent InnerBorder" width="100%">
    {header}
    {rows}
  </table>
</div>
</body></html>"#
    )
}

pub const POWER_GAMERS_HEADER: &str =
    "<tr class=\"LabelH\"><td>Rank</td><td>Name</td><td>Vocation</td><td>Level</td><td>Today</td></tr>";

pub const POWER_GAMERS_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>Miracle 74 - Power Gamers</title></head>
<body>
<table class="TableContent InnerBorder" id="menu-decor"></table>
<div class="TableContainer">
  <table class="TableContent InnerBorder" width="100%">
    <tr class="LabelH"><td>Rank</td><td>Name</td><td>Vocation</td><td>Level</td><td>Today</td></tr>
    <tr class="Odd"><td>1</td><td>Alpha</td><td>Elite Knight</td><td>300</td><td>1,523,400</td></tr>
    <tr class="Even"><td>2</td><td>Bravo</td><td>Royal Paladin</td><td>250</td><td>900000</td></tr>
    <tr class="Odd"><td colspan="5">Advertisement</td></tr>
    <tr class="Even"><td>4</td><td>Delta</td><td>Druid</td><td>n/a</td><td>500</td></tr>
    <tr class="Odd"><td>5</td><td>Echo</td><td>Sorcerer</td><td>199</td><td>12</td></tr>
  </table>
</div>
</body></html>"#;

/// A power gamers page carrying the given `(rank, name)` rows.
pub fn power_gamers_page(entries: &[(u32, &str)]) -> String {
    let rows: String = entries
        .iter()
        .map(|(rank, name)| {
            format!(
                "<tr><td>{rank}</td><td>{name}</td><td>Knight</td><td>100</td><td>{}</td></tr>",
                rank * 10
            )
        })
        .collect();
    listing_page(POWER_GAMERS_HEADER, &rows)
}

pub const INSOMNIACS_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>Miracle 74 - Insomniacs</title></head>
<body>
<div class="TableContainer">
  <table class="TableContent InnerBorder" width="100%">
    <tr class="LabelH"><td>Rank</td><td>Name</td><td>Vocation</td><td>Level</td><td>Time online</td></tr>
    <tr><td>1</td><td><img src="/images/flags/se.gif"> <a href="?subtopic=characters&amp;name=Night+Owl">Night Owl</a></td><td>Knight</td><td>88</td><td>23h 58m</td></tr>
    <tr><td>2</td><td><a href="?subtopic=characters&amp;name=Sleepless">Sleepless</a></td><td>Druid</td><td>77</td><td>22h 10m</td></tr>
    <tr><td>3</td><td>Unlinked</td><td>Druid</td><td>70</td><td>20h 00m</td></tr>
  </table>
</div>
</body></html>"#;

/// An insomniacs page carrying the given `(rank, name)` rows.
pub fn insomniacs_page(entries: &[(u32, &str)]) -> String {
    let header = "<tr><td>Rank</td><td>Name</td><td>Vocation</td><td>Level</td><td>Time online</td></tr>";
    let rows: String = entries
        .iter()
        .map(|(rank, name)| {
            format!(
                "<tr><td>{rank}</td><td><a href=\"?subtopic=characters\">{name}</a></td>\
                 <td>Druid</td><td>50</td><td>10h</td></tr>"
            )
        })
        .collect();
    listing_page(header, &rows)
}

pub const GUILD_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>Miracle 74 - Guilds</title></head>
<body>
<div class="GuildInformation">The Dragons were founded on Miracle 74.</div>
<div class="TableContainer">
  <table class="TableContent InnerBorder" width="100%">
    <tr class="LabelH"><td>Rank</td><td>Name and Title</td><td>Vocation</td><td>Level</td><td>Status</td></tr>
    <tr><td>Leader</td><td><a href="?subtopic=characters&amp;name=Bubble">Bubble</a> (The Founder)</td><td>Elite Knight</td><td>120</td><td><span class="green">Online</span></td></tr>
    <tr><td>Member</td><td><a href="?subtopic=characters&amp;name=Alice">Alice</a></td><td>Druid</td><td>80</td><td>3 days offline</td></tr>
    <tr><td></td><td><a href="?subtopic=characters&amp;name=Charlie">Charlie</a></td><td>Sorcerer</td><td>60</td><td>2 hours online</td></tr>
  </table>
</div>
</body></html>"#;

pub const WHO_IS_ONLINE_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>Miracle 74 - Who is online</title></head>
<body>
<div class="TableContainer">
  <table class="TableContent InnerBorder" width="100%">
    <tr class="LabelH"><td>Name</td><td>Level</td><td>Vocation</td></tr>
    <tr><td><img src="/images/flags/pl.gif"> <a href="?subtopic=characters&amp;name=Alpha">Alpha</a></td><td>250</td><td>Master Sorcerer</td></tr>
    <tr><td><a href="?subtopic=characters&amp;name=Bravo">Bravo</a></td><td>100</td><td>Knight</td></tr>
  </table>
</div>
</body></html>"#;
