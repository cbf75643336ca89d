// DOM contract of the portfolio page.
//
// Element ids, selectors and class names the bindings look up. Keeping
// them here lets the page markup change in one place.

// Marquee
pub const MARQUEE_VIEWPORT_SELECTOR: &str = ".marquee-viewport";
pub const MARQUEE_TRACK_SELECTOR: &str = ".marquee-track";
pub const ATTR_SPEED: &str = "data-speed";
pub const ATTR_DIRECTION: &str = "data-direction";
pub const DRAG_CURSOR: &str = "grabbing";

// Overlays
pub const MODAL_IDS: [&str; 3] = ["modalReceipt", "modalInvoice", "modalResume"];
pub const LIGHTBOX_ID: &str = "imgLightbox";
pub const LIGHTBOX_IMAGE_ID: &str = "imgLightboxSrc";
pub const CLASS_VISIBLE: &str = "is-visible";
pub const CLASS_OPEN: &str = "is-open";
pub const CLASS_BODY_MODAL_OPEN: &str = "modal-open";
pub const WORKFLOW_NODE_SELECTOR: &str = ".workflow-node";

// Reveal
pub const REVEAL_SECTION_SELECTOR: &str = "section[data-reveal]";
pub const REVEAL_ITEM_SELECTOR: &str = ".skill-tag, .card, .project-card";
pub const CLASS_REVEALED: &str = "revealed";
pub const SKILL_TAG_SELECTOR: &str = ".skill-tag";
pub const SKILL_TAG_GLOW: &str = "0 0 18px rgba(0,212,255,0.22)";
pub const CARD_TRANSITION: &str = "opacity 0.55s ease, transform 0.55s ease";
pub const WORKFLOW_NODE_TRANSITION: &str = "opacity 0.4s ease, transform 0.4s ease";

// Navigation
pub const MAIN_NAV_ID: &str = "mainNav";
pub const DESKTOP_NAV_LINK_SELECTOR: &str = ".nav-desktop a";
pub const MOBILE_NAV_ITEM_SELECTOR: &str = ".mobile-nav-item";
pub const MOBILE_NAV_TRACK_ID: &str = "mobileNavTrack";
pub const NAV_DOT_SELECTOR: &str = ".nav-dot";
pub const SECTION_WITH_ID_SELECTOR: &str = "section[id]";
pub const ATTR_SECTION: &str = "data-section";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const SECTION_IDS: [&str; 7] = [
    "about",
    "skills",
    "experience",
    "projects",
    "education",
    "resume",
    "contact",
];
