use askama::Template;

use crate::{
    components::ui::{Button, ButtonVariant},
    i18n::Translator,
    models::{format_price, PriceType, ServiceCategory, ServiceItem, SubCategory},
};

pub fn price_label(t: Translator, price_type: PriceType) -> String {
    match price_type {
        PriceType::Fixed => t.get("price.fixed").to_string(),
        PriceType::Estimated => t.get("price.estimated").to_string(),
    }
}

#[derive(Template)]
#[template(path = "components/service_card.html")]
pub struct ServiceCard {
    name: String,
    description: String,
    price: String,
    price_label: String,
    detail_href: String,
    book_button: Button,
}

impl ServiceCard {
    pub fn new(t: Translator, service: &ServiceItem) -> Self {
        Self {
            name: t.pick(&service.name, &service.name_ur).to_string(),
            description: service.description.clone(),
            price: format_price(service.price),
            price_label: price_label(t, service.price_type),
            detail_href: format!("/services/{}", service.id),
            book_button: Button::link(
                t.get("services.book"),
                format!("/book/{}", service.id),
                ButtonVariant::Primary,
            ),
        }
    }
}

#[derive(Template)]
#[template(path = "components/category_card.html")]
pub struct CategoryCard {
    icon: String,
    name: String,
    description: String,
    href: String,
}

impl CategoryCard {
    pub fn new(t: Translator, category: &ServiceCategory) -> Self {
        Self {
            icon: category.icon.svg(),
            name: t.pick(&category.name, &category.name_ur).to_string(),
            description: category.description.clone(),
            href: format!("/categories/{}", category.id),
        }
    }

    pub fn sub_category(t: Translator, category: &ServiceCategory, sub: &SubCategory) -> Self {
        Self {
            icon: category.icon.svg(),
            name: t.pick(&sub.name, &sub.name_ur).to_string(),
            description: sub.description.clone(),
            href: format!("/categories/{}/{}", category.id, sub.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        i18n::{translator, Language},
        seed,
    };

    #[test]
    fn service_card_localizes_name() {
        let service = seed::services().into_iter().next().unwrap();
        let en = ServiceCard::new(translator(Language::En), &service).render().unwrap();
        let ur = ServiceCard::new(translator(Language::Ur), &service).render().unwrap();
        assert!(en.contains("Tap Repair"));
        assert!(en.contains("Rs. 800"));
        assert!(en.contains("Fixed price"));
        assert!(ur.contains("نل کی مرمت"));
        assert!(ur.contains("مقررہ قیمت"));
    }
}
