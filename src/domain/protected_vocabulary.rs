use serde::Deserialize;

/// Groups of built-in protected terms that can be switched on in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermCategory {
    PersonalNames,
    CompanyNames,
    PlaceNames,
    ObjectNames,
}

impl TermCategory {
    pub const DEFAULTS: [TermCategory; 3] = [
        TermCategory::PersonalNames,
        TermCategory::CompanyNames,
        TermCategory::PlaceNames,
    ];

    pub fn terms(&self) -> &'static [&'static str] {
        match self {
            TermCategory::PersonalNames => PERSONAL_NAMES,
            TermCategory::CompanyNames => COMPANY_NAMES,
            TermCategory::PlaceNames => PLACE_NAMES,
            TermCategory::ObjectNames => OBJECT_NAMES,
        }
    }
}

/// Built-in terms for the given categories followed by `extra`, de-duplicated
/// case-insensitively with first spelling kept.
pub fn build_vocabulary(categories: &[TermCategory], extra: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    categories
        .iter()
        .flat_map(|category| category.terms().iter().map(|term| term.to_string()))
        .chain(extra.iter().map(|term| term.trim().to_string()))
        .filter(|term| !term.is_empty())
        .filter(|term| seen.insert(term.to_lowercase()))
        .collect()
}

const PERSONAL_NAMES: &[&str] = &[
    "Aaron", "Adam", "Adrian", "Alan", "Albert", "Alex", "Alexander", "Allen", "Andrew", "Anthony",
    "Arthur", "Austin", "Benjamin", "Bill", "Blake", "Brandon", "Brian", "Bruce", "Bryan", "Carl",
    "Carlos", "Charles", "Christian", "Christopher", "Craig", "Daniel", "David", "Dean", "Dennis",
    "Douglas", "Drew", "Edward", "Eric", "Frank", "Gary", "George", "Grant", "Gregory", "Harold",
    "Harry", "Henry", "Jack", "James", "Jason", "Jeffrey", "Jeremy", "John", "Jonathan", "Joseph",
    "Joshua", "Justin", "Keith", "Kenneth", "Kevin", "Larry", "Lawrence", "Mark", "Matthew",
    "Michael", "Nicholas", "Patrick", "Paul", "Peter", "Philip", "Raymond", "Richard", "Robert",
    "Ronald", "Ryan", "Samuel", "Scott", "Sean", "Stephen", "Steven", "Thomas", "Timothy",
    "William", "Zachary", "Amanda", "Amy", "Andrea", "Angela", "Anna", "Ashley", "Barbara",
    "Betty", "Brenda", "Carol", "Carolyn", "Catherine", "Christine", "Cynthia", "Deborah", "Debra",
    "Diana", "Donna", "Dorothy", "Elizabeth", "Emily", "Emma", "Evelyn", "Frances", "Helen",
    "Janet", "Janice", "Jean", "Jennifer", "Jessica", "Joan", "Joyce", "Judith", "Julie", "Karen",
    "Kathleen", "Kathryn", "Kelly", "Kimberly", "Laura", "Linda", "Lisa", "Margaret", "Maria",
    "Marie", "Martha", "Mary", "Melissa", "Michelle", "Nancy", "Nicole", "Olivia", "Pamela",
    "Patricia", "Rachel", "Rebecca", "Ruth", "Sandra", "Sarah", "Sharon", "Stephanie", "Susan",
    "Teresa", "Virginia", "Wendy", "Harsh", "Rocky", "Lucky", "Honey", "Deep", "Rose", "Sunny",
    "Jasmine", "Crystal", "Amber", "Brandy", "Brooks", "Clay", "Cliff", "Duke", "Forrest",
    "Hunter", "Lance", "Miles", "Reed", "Rob", "Roman", "Rusty", "Sky", "Stone", "Wade", "Woody",
    "Blaze", "Chase", "Chip", "Colt", "Dash", "Jett", "Link", "Cash", "King", "Legend", "Major",
    "Reign", "Royal", "Saint", "Wilder", "Zen", "Angel", "Blue", "Cricket", "Destiny", "Faith",
    "Grace", "Harmony", "Haven", "Heaven", "Honor", "Hope", "Journey", "Joy", "Justice", "Liberty",
    "Melody", "Mercy", "Patience", "Peace", "Precious", "Serenity", "Trinity", "True", "Wisdom",
    "Winter", "August", "Genesis", "Noel", "Paris", "Reagan", "Zion",
];

const COMPANY_NAMES: &[&str] = &[
    "Apple", "Microsoft", "Google", "Amazon", "Facebook", "Meta", "Netflix", "Tesla", "Samsung",
    "Sony", "Nike", "Adidas", "Coca-Cola", "Pepsi", "McDonald's", "Starbucks", "Walmart",
    "Target", "IBM", "Intel", "AMD", "NVIDIA", "Oracle", "Salesforce", "Adobe", "Uber", "Airbnb",
    "PayPal", "Visa", "MasterCard", "American Express", "Goldman Sachs", "JPMorgan",
    "Morgan Stanley", "Ford", "BMW", "Mercedes", "Audi", "Toyota", "Honda", "Volkswagen",
    "Ferrari", "Lamborghini", "Rolex", "Gucci", "Louis Vuitton", "Prada", "Chanel", "Versace",
    "Armani", "Burberry",
];

const PLACE_NAMES: &[&str] = &[
    "Austin", "Dallas", "Houston", "Phoenix", "Denver", "Portland", "Seattle", "Atlanta", "Miami",
    "Orlando", "Tampa", "Nashville", "Memphis", "Charlotte", "Raleigh", "Virginia", "Georgia",
    "Carolina", "Montana", "Dakota", "Nevada", "Arizona", "Colorado", "Indiana", "Maryland",
    "Delaware", "Connecticut", "Vermont", "Maine", "Alaska", "Hawaii", "Utah", "Idaho", "Wyoming",
    "London", "Paris", "Berlin", "Rome", "Madrid", "Vienna", "Prague", "Dublin", "Edinburgh",
    "Glasgow", "Cardiff", "Belfast", "Amsterdam", "Brussels", "Geneva", "Zurich", "Stockholm",
    "Oslo", "Helsinki", "Copenhagen", "Warsaw", "Budapest", "Bucharest", "Sofia", "Zagreb",
    "Athens", "Istanbul", "Moscow", "Kiev", "Minsk", "Riga", "Vilnius", "Tallinn",
];

const OBJECT_NAMES: &[&str] = &[
    "Boat", "River", "Lake", "Ocean", "Mountain", "Valley", "Forest", "Desert", "Island", "Beach",
    "Storm", "Thunder", "Lightning", "Rain", "Snow", "Ice", "Fire", "Flame", "Spark", "Ember",
    "Star", "Moon", "Sun", "Cloud", "Wind", "Wave", "Tide", "Current", "Stream", "Brook",
    "Diamond", "Ruby", "Emerald", "Sapphire", "Pearl", "Gold", "Silver", "Platinum", "Bronze",
    "Copper",
];
