pub(crate) struct SeedContact {
    pub first: &'static str,
    pub last: &'static str,
    pub twitter: Option<&'static str>,
}

const fn seed(first: &'static str, last: &'static str, twitter: &'static str) -> SeedContact {
    SeedContact {
        first,
        last,
        twitter: Some(twitter),
    }
}

pub(crate) const SEED_CONTACTS: &[SeedContact] = &[
    seed("Shruti", "Kapoor", "@shrutikapoor08"),
    seed("Glenn", "Reyes", "@glnnrys"),
    seed("Ryan", "Florence", "@ryanflorence"),
    seed("Oscar", "Newman", "@__oscarnewman"),
    seed("Michael", "Jackson", "@mjackson"),
    seed("Christopher", "Chedeau", "@Vjeux"),
    seed("Cameron", "Matheson", "@cmatheson"),
    seed("Brooks", "Lybrand", "@BrooksLybrand"),
    seed("Alex", "Anderson", "@ralex1993"),
    seed("Kent C.", "Dodds", "@kentcdodds"),
    seed("Nevi", "Shah", "@nevikashah"),
    seed("Andrew", "Petersen", "@AndrewPetersen_"),
    seed("Scott", "Smerchek", "@smerchek"),
    seed("Giovanni", "Benussi", "@giovannibenussi"),
    seed("Igor", "Minar", "@IgorMinar"),
    seed("Arisa", "Fukuzaki", "@arisa_dev"),
    seed("Pedro", "Cattori", "@pcattori"),
    seed("Monica", "Powell", "@indigitalcolor"),
];
