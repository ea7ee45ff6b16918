// Palette selection for the theme flag
//

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Palette {
    pub bg: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
}

pub const LIGHT: Palette = Palette {
    bg: "#ffffff",
    text: "#202124",
    accent: "#6246ea",
};

pub const DARK: Palette = Palette {
    bg: "#16161a",
    text: "#fffffe",
    accent: "#7f5af0",
};

pub fn palette(is_darkmode: bool) -> Palette {
    if is_darkmode {
        DARK
    } else {
        LIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_flag_selects_palette() {
        assert_eq!(palette(false), LIGHT);
        assert_eq!(palette(true), DARK);
    }
}
