/// Coloured chat label for a player's rank.
///
/// Staff and creator ranks win over the purchased rank.
pub fn format_rank(paid_rank: &str, rank: &str, username: &str) -> String {
    match rank {
        "YOUTUBER" => return format!("&f[&cYOUTUBE&f] &c{}&r", username),
        "ADMIN" => return format!("&c[ADMIN] {}&r", username),
        _ => {}
    }

    match paid_rank {
        "MVP_PLUS_PLUS" => format!("&6[MVP&c++&6] {}&r", username),
        "MVP_PLUS" => format!("&b[MVP&c+&b] {}&r", username),
        "MVP" => format!("&b[MVP] {}&r", username),
        "VIP_PLUS" => format!("&a[VIP&6+&a] {}&r", username),
        "VIP" => format!("&a[VIP] {}&r", username),
        _ => format!("&7{}&r", username),
    }
}
