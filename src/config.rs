pub fn onboarding_path() -> &'static str {
    "/onboarding"
}

pub fn main_page_path() -> &'static str {
    "/"
}

// How long the curating screen stays up before redirecting home.
pub const CURATING_REDIRECT_MS: u32 = 3_000;
