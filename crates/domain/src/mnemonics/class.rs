use std::borrow::Cow;

pub fn class_mnemonic(class: u16) -> Cow<'static, str> {
    match class {
        1 => Cow::Borrowed("IN"),
        2 => Cow::Borrowed("CS"),
        3 => Cow::Borrowed("CH"),
        4 => Cow::Borrowed("HS"),
        254 => Cow::Borrowed("NONE"),
        255 => Cow::Borrowed("ANY"),
        other => Cow::Owned(format!("CLASS{}", other)),
    }
}
