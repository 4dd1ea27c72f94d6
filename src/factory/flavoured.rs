use tracing::debug;

use super::cake::{Cake, CakeType, FancyCake, Flavour, SimpleCake};

/// Factory configured once with a flavour, then asked for cake types.
///
/// Every new flavour means another arm in every branch of `bake_cake`; the
/// abstract factory splits those arms into one factory per flavour.
#[derive(Debug, Clone, Copy)]
pub struct FlavouredCakeFactory {
    flavour: Flavour,
}

impl FlavouredCakeFactory {
    pub fn new(flavour: Flavour) -> Self {
        Self { flavour }
    }

    pub fn flavour(&self) -> Flavour {
        self.flavour
    }

    pub fn bake_cake(&self, cake_type: CakeType) -> Box<dyn Cake> {
        debug!(flavour = %self.flavour, %cake_type, "baking cake");
        match (cake_type, self.flavour) {
            (CakeType::Simple, Flavour::Vanilla) => {
                Box::new(SimpleCake::new("A simple vanilla cake."))
            }
            (CakeType::Simple, Flavour::Chocolate) => {
                Box::new(SimpleCake::new("A simple chocolate cake."))
            }
            (CakeType::Fancy, Flavour::Vanilla) => {
                Box::new(FancyCake::new("Vanilla cake.", "Marmalade", "Buttercream"))
            }
            (CakeType::Fancy, Flavour::Chocolate) => Box::new(FancyCake::new(
                "Chocolate cake.",
                "Chocolate mousse",
                "Chocolate glaze",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn described(flavour: Flavour, cake_type: CakeType) -> String {
        let mut out = Vec::new();
        FlavouredCakeFactory::new(flavour)
            .bake_cake(cake_type)
            .describe(&mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_all_four_combinations() {
        let cases = [
            (Flavour::Vanilla, CakeType::Simple, "A simple vanilla cake.\n"),
            (Flavour::Chocolate, CakeType::Simple, "A simple chocolate cake.\n"),
            (
                Flavour::Vanilla,
                CakeType::Fancy,
                "Vanilla cake.\nMarmalade\nButtercream\n",
            ),
            (
                Flavour::Chocolate,
                CakeType::Fancy,
                "Chocolate cake.\nChocolate mousse\nChocolate glaze\n",
            ),
        ];

        for (flavour, cake_type, expected) in cases {
            assert_eq!(described(flavour, cake_type), expected, "{flavour} {cake_type}");
        }
    }

    #[test]
    fn test_flavour_is_fixed_at_construction() {
        let bakery = FlavouredCakeFactory::new(Flavour::Chocolate);
        assert_eq!(bakery.flavour(), Flavour::Chocolate);
    }
}
