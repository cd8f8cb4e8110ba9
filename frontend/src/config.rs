//! Build-time settings. Set them in the environment when running `trunk build`.

pub fn get_backend_url() -> &'static str {
    // Empty means same origin, which is how the backend serves the site.
    option_env!("BACKEND_URL").unwrap_or("")
}

pub fn get_site_url() -> &'static str {
    option_env!("SITE_URL").unwrap_or("https://absolutation.space")
}

pub const CONTACT_EMAIL: &str = "sonukr24082001@gmail.com";
pub const WHATSAPP_DISPLAY: &str = "+91 8709138950";
pub const WHATSAPP_LINK: &str =
    "https://wa.me/8709138950?text=Hi%20Joey!%20I%20have%20an%20app%20idea%20I%20want%20to%20discuss.";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/abhishek-kumar-201b91195/";
