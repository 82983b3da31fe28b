use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(EnumString, Display, VariantArray, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectType {
    #[default]
    #[strum(serialize = "Spot Publicitario")]
    Commercial,
    #[strum(serialize = "Video Corporativo")]
    Corporate,
    #[strum(serialize = "Cobertura Evento")]
    EventCoverage,
    #[strum(serialize = "Documental")]
    Documentary,
    #[strum(serialize = "Motion Graphics")]
    MotionGraphics,
}

#[derive(EnumString, Display, VariantArray, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Budget {
    #[strum(serialize = "1k - 5k USD")]
    UpTo5k,
    #[default]
    #[strum(serialize = "5k - 10k USD")]
    UpTo10k,
    #[strum(serialize = "10k - 30k USD")]
    UpTo30k,
    #[strum(serialize = "+30k USD")]
    Over30k,
}

#[derive(EnumString, Display, VariantArray, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarketingService {
    #[default]
    #[strum(serialize = "Estrategia Integral")]
    IntegralStrategy,
    #[strum(serialize = "Paid Media (Ads)")]
    PaidMedia,
    #[strum(serialize = "Analítica Web (GA4)")]
    WebAnalytics,
    #[strum(serialize = "CRO & UX")]
    Cro,
    #[strum(serialize = "E-commerce Dev")]
    Ecommerce,
}

/// Labels of every variant of a catalog, in declaration order.
pub fn catalog<T>() -> Vec<&'static str>
where
    T: VariantArray + AsRef<str>,
{
    T::VARIANTS.iter().map(|v| v.as_ref()).collect()
}

/// Label of the catalog's default entry.
pub fn catalog_default<T>() -> &'static str
where
    T: VariantArray + AsRef<str> + Default + PartialEq,
{
    let default = T::default();

    T::VARIANTS
        .iter()
        .find(|v| **v == default)
        .map(|v| v.as_ref())
        .unwrap_or_default()
}
