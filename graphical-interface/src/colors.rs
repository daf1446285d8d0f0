use egui::Color32;

/// Display color for an Aqours member's name in the tooltip, following the
/// franchise's official member colors. Unknown names fall back to a neutral
/// gray so an unexpected name in the data cannot break rendering.
pub fn member_color(member: &str) -> Color32 {
    match member {
        "高海千歌" => Color32::from_rgb(0xF0, 0xA2, 0x0B),
        "桜内梨子" => Color32::from_rgb(0xE9, 0xA9, 0xE8),
        "松浦果南" => Color32::from_rgb(0x13, 0xE8, 0xAE),
        "黒澤ダイヤ" => Color32::from_rgb(0xF2, 0x3B, 0x4C),
        "渡辺曜" => Color32::from_rgb(0x49, 0xB9, 0xF9),
        "津島善子" => Color32::from_rgb(0x89, 0x89, 0x89),
        "国木田花丸" => Color32::from_rgb(0xE6, 0xD6, 0x17),
        "小原鞠莉" => Color32::from_rgb(0xAE, 0x58, 0xEB),
        "黒澤ルビィ" => Color32::from_rgb(0xFB, 0x75, 0xE4),
        _ => Color32::LIGHT_GRAY,
    }
}
