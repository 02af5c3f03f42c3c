//! seed - demonstration catalog for quick sessions

use crate::core::book::NewBook;
use crate::core::types::MembershipTier;
use crate::service::{LendingError, LendingService};

/// Load a small catalog and roster into a fresh service.
pub fn seed_demo(service: &LendingService) -> Result<(), LendingError> {
    let books: [(&str, &str, Option<&str>, u32); 5] = [
        ("Clean Code", "Robert C. Martin", Some("Software"), 2),
        ("Introduction to Algorithms", "Cormen et al.", Some("Software"), 1),
        ("1984", "George Orwell", Some("Dystopian"), 3),
        ("Brave New World", "Aldous Huxley", Some("Dystopian"), 2),
        (
            "The Left Hand of Darkness",
            "Ursula K. Le Guin",
            Some("Science Fiction"),
            1,
        ),
    ];
    for (title, author, genre, copies) in books {
        service.add_book(NewBook {
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.map(str::to_string),
            copies,
        })?;
    }

    for (name, tier) in [
        ("Alice", MembershipTier::Regular),
        ("Bob", MembershipTier::Premium),
        ("Charlie", MembershipTier::Regular),
    ] {
        service.register_member(name, tier, None)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::service::LendingPolicy;

    #[test]
    fn seeds_books_and_members() {
        let service =
            LendingService::in_memory(LendingPolicy::from_config(&Config::default()).unwrap());
        seed_demo(&service).unwrap();

        assert_eq!(service.list_books().unwrap().len(), 5);
        assert_eq!(service.list_members().unwrap().len(), 3);
    }

    #[test]
    fn premium_member_gets_premium_limit() {
        let service =
            LendingService::in_memory(LendingPolicy::from_config(&Config::default()).unwrap());
        seed_demo(&service).unwrap();

        let members = service.list_members().unwrap();
        let bob = members.iter().find(|m| m.name() == "Bob").unwrap();
        assert_eq!(bob.tier(), MembershipTier::Premium);
        assert_eq!(bob.borrow_limit().get(), 5);
    }
}
