//! Static email catalogues, one per flow type.
//!
//! Each catalogue lists the canonical emails of a flow in send order. The
//! strategy builder renders a prefix of the catalogue into
//! [`EmailStrategy`] records; `{brand}` and `{offer}` placeholders are
//! substituted at render time.

use crate::error::CoreError;
use crate::flow_type::FlowType;
use crate::strategy::EmailStrategy;

/// One canonical email of a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailTemplate {
    /// Days after the flow trigger.
    pub day: u32,
    pub theme: &'static str,
    pub focus: &'static str,
    pub key_message: &'static str,
    pub products: &'static str,
    /// `Some` when the email carries the promotional offer.
    pub offer_type: Option<&'static str>,
}

const BRAND: &str = "{brand}";
const OFFER: &str = "{offer}";

static WELCOME: [EmailTemplate; 5] = [
    EmailTemplate {
        day: 0,
        theme: "Welcome to the {brand} Family",
        focus: "Warm welcome and brand introduction",
        key_message: "Thank the subscriber for joining and deliver {offer} right away",
        products: "Bestsellers and hero products",
        offer_type: Some("welcome_discount"),
    },
    EmailTemplate {
        day: 2,
        theme: "Our Story & Mission",
        focus: "Brand heritage, founder story and values",
        key_message: "Show why {brand} exists and what it stands for, with {offer} as a gentle reminder",
        products: "Signature product line",
        offer_type: Some("reminder"),
    },
    EmailTemplate {
        day: 4,
        theme: "Meet Your Perfect Products",
        focus: "Product discovery and education",
        key_message: "Guide the subscriber to the right product for their needs; {offer} still applies",
        products: "Category highlights and starter picks",
        offer_type: Some("reminder"),
    },
    EmailTemplate {
        day: 7,
        theme: "What Our Customers Are Saying",
        focus: "Social proof through reviews and testimonials",
        key_message: "Let real customers make the case and flag that {offer} expires soon",
        products: "Top-rated products",
        offer_type: Some("last_chance"),
    },
    EmailTemplate {
        day: 10,
        theme: "Getting the Most From {brand}",
        focus: "Tips, community and long-term value",
        key_message: "Invite the subscriber into the {brand} community beyond the first purchase",
        products: "Accessories and care essentials",
        offer_type: None,
    },
];

static ABANDONED_CHECKOUT: [EmailTemplate; 4] = [
    EmailTemplate {
        day: 0,
        theme: "You Left Something Behind",
        focus: "Gentle reminder of the items in the cart",
        key_message: "Bring the shopper back to the exact products they chose",
        products: "Cart items",
        offer_type: None,
    },
    EmailTemplate {
        day: 1,
        theme: "Still Thinking It Over?",
        focus: "Address objections: shipping, returns and guarantees",
        key_message: "Remove the doubts that stop the purchase and show why {brand} is a safe choice",
        products: "Cart items",
        offer_type: None,
    },
    EmailTemplate {
        day: 3,
        theme: "A Little Something to Help You Decide",
        focus: "Incentive to complete the purchase",
        key_message: "Present {offer} as a reason to finish checking out today",
        products: "Cart items",
        offer_type: Some("cart_discount"),
    },
    EmailTemplate {
        day: 5,
        theme: "Last Chance: Your Cart Is Expiring",
        focus: "Urgency and scarcity",
        key_message: "Make clear the cart and {offer} will not wait much longer",
        products: "Cart items",
        offer_type: Some("final_reminder"),
    },
];

static BROWSE_ABANDONMENT: [EmailTemplate; 3] = [
    EmailTemplate {
        day: 0,
        theme: "Still Looking?",
        focus: "Reminder of the products they browsed",
        key_message: "Resurface what caught their eye with a helpful, low-pressure tone",
        products: "Recently viewed products",
        offer_type: None,
    },
    EmailTemplate {
        day: 2,
        theme: "Customers Also Loved",
        focus: "Related recommendations and social proof",
        key_message: "Broaden the choice with popular alternatives and what buyers say about them",
        products: "Related and top-rated products",
        offer_type: None,
    },
    EmailTemplate {
        day: 4,
        theme: "A Special Offer on Your Favorites",
        focus: "Incentive to convert browsing into buying",
        key_message: "Use {offer} to turn interest into a first order",
        products: "Recently viewed products",
        offer_type: Some("browse_discount"),
    },
];

static POST_PURCHASE: [EmailTemplate; 4] = [
    EmailTemplate {
        day: 0,
        theme: "Thank You for Your Order",
        focus: "Gratitude and what to expect next",
        key_message: "Confirm the customer made a great choice and set delivery expectations",
        products: "Purchased products",
        offer_type: None,
    },
    EmailTemplate {
        day: 3,
        theme: "Getting Started With Your Purchase",
        focus: "Product usage tips and care instructions",
        key_message: "Help the customer get value from the product from day one",
        products: "Purchased products",
        offer_type: None,
    },
    EmailTemplate {
        day: 10,
        theme: "How Are You Enjoying It?",
        focus: "Review request and feedback",
        key_message: "Ask for an honest review and make leaving one effortless",
        products: "Purchased products",
        offer_type: None,
    },
    EmailTemplate {
        day: 21,
        theme: "Complete Your Collection",
        focus: "Cross-sell complementary products",
        key_message: "Recommend what pairs well with the purchase and reward loyalty with {offer}",
        products: "Complementary products",
        offer_type: Some("loyalty_discount"),
    },
];

static WINBACK: [EmailTemplate; 4] = [
    EmailTemplate {
        day: 0,
        theme: "We Miss You at {brand}",
        focus: "Re-engagement and reconnection",
        key_message: "Remind the lapsed customer what they loved about {brand}",
        products: "Previously purchased categories",
        offer_type: None,
    },
    EmailTemplate {
        day: 3,
        theme: "See What's New",
        focus: "New arrivals and improvements since their last visit",
        key_message: "Show how much has changed and give them a reason to look again",
        products: "New arrivals",
        offer_type: None,
    },
    EmailTemplate {
        day: 7,
        theme: "A Gift to Welcome You Back",
        focus: "Comeback incentive",
        key_message: "Offer {offer} as a personal invitation to return",
        products: "Bestsellers",
        offer_type: Some("winback_discount"),
    },
    EmailTemplate {
        day: 14,
        theme: "Is This Goodbye?",
        focus: "Final attempt and preference update",
        key_message: "Give one last nudge with {offer} and let them choose how often to hear from {brand}",
        products: "Bestsellers",
        offer_type: Some("final_offer"),
    },
];

impl FlowType {
    /// The template catalogue for this flow type.
    pub fn templates(self) -> &'static [EmailTemplate] {
        match self {
            FlowType::Welcome => &WELCOME,
            FlowType::AbandonedCheckout => &ABANDONED_CHECKOUT,
            FlowType::BrowseAbandonment => &BROWSE_ABANDONMENT,
            FlowType::PostPurchase => &POST_PURCHASE,
            FlowType::Winback => &WINBACK,
        }
    }
}

/// Look up a catalogue by its wire tag.
pub fn templates_for(tag: &str) -> Result<&'static [EmailTemplate], CoreError> {
    Ok(tag.parse::<FlowType>()?.templates())
}

impl EmailTemplate {
    /// Render the template into a numbered strategy entry.
    pub fn render(&self, email_number: u32, brand: &str, offer: &str) -> EmailStrategy {
        let fill = |s: &str| s.replace(BRAND, brand).replace(OFFER, offer);
        EmailStrategy {
            email_number,
            day: self.day,
            theme: fill(self.theme),
            focus: fill(self.focus),
            key_message: fill(self.key_message),
            products: fill(self.products),
            has_offer: self.offer_type.is_some(),
            offer_type: self.offer_type.map(str::to_string),
        }
    }
}
