//! Brand catalog and per-brand notification text

/// A brand the portal accepts claims for, with the notice the user must
/// acknowledge before submitting a claim against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brand {
    pub slug: &'static str,
    pub name: &'static str,
    pub notice: &'static str,
}

/// All brands offered by the selector, in display order.
pub fn brand_catalog() -> &'static [Brand] {
    BRANDS
}

/// Notice text for a brand slug, if the slug is known.
pub fn notice_for(slug: &str) -> Option<&'static str> {
    BRANDS.iter().find(|b| b.slug == slug).map(|b| b.notice)
}

const BRANDS: &[Brand] = &[
    Brand {
        slug: "northwind",
        name: "Northwind Appliances",
        notice: "Northwind claims are forwarded to the manufacturer's service \
                 centre. Replacement parts can take up to 14 business days to \
                 ship, and the original order number must match the unit's \
                 serial record.",
    },
    Brand {
        slug: "helios",
        name: "Helios Home",
        notice: "Helios Home requires proof of purchase before a technician \
                 visit is scheduled. You will receive a document upload link \
                 by email after this claim is registered.",
    },
    Brand {
        slug: "cascade",
        name: "Cascade Audio",
        notice: "Cascade Audio handles warranty returns by mail only. A \
                 prepaid shipping label is issued once the claim is approved; \
                 do not ship the unit before receiving it.",
    },
    Brand {
        slug: "ironpeak",
        name: "Ironpeak Tools",
        notice: "Ironpeak Tools claims opened within 30 days of purchase are \
                 routed to the retailer, not the manufacturer. Processing may \
                 involve an in-store inspection.",
    },
    Brand {
        slug: "veltec",
        name: "Veltec Electronics",
        notice: "Veltec Electronics performs remote diagnostics first. Keep \
                 the device powered and reachable; a support agent will \
                 contact you within two business days.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_slugs_are_unique() {
        let mut slugs: Vec<_> = brand_catalog().iter().map(|b| b.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), brand_catalog().len());
    }

    #[test]
    fn every_brand_has_a_notice() {
        for brand in brand_catalog() {
            assert_eq!(notice_for(brand.slug), Some(brand.notice));
            assert!(!brand.notice.is_empty());
        }
        assert_eq!(notice_for("unknown"), None);
    }
}
