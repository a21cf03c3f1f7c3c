// Colours shared by the panels; the canvas keeps its own set in map_view.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub panel: &'static str,
    pub border: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
}

pub const LIGHT: Palette = Palette {
    background: "#f5f5f5",
    text: "#222222",
    panel: "rgba(255,255,255,0.95)",
    border: "#d0d7de",
    muted: "#57606a",
    accent: "#1f6feb",
};

pub const DARK: Palette = Palette {
    background: "#0e1116",
    text: "#c9d1d9",
    panel: "rgba(22,27,34,0.95)",
    border: "#30363d",
    muted: "#8b949e",
    accent: "#58a6ff",
};

pub fn palette(dark: bool) -> Palette {
    if dark { DARK } else { LIGHT }
}
