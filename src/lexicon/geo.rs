//! Country alias, region, TLD and language tables.

/// `(country, region, aliases)`. Aliases are matched case-insensitively as
/// whole words.
pub(crate) const COUNTRIES: &[(&str, &str, &[&str])] = &[
    // Europe
    ("Albania", "Southern Europe", &["albania", "shqipëria", "tirana"]),
    ("Andorra", "Southern Europe", &["andorra", "andorre"]),
    ("Austria", "Central Europe", &["austria", "österreich", "vienna"]),
    ("Belarus", "Eastern Europe", &["belarus", "belarús", "minsk"]),
    ("Belgium", "Western Europe", &["belgium", "belgique", "belgië", "belgie"]),
    ("Bosnia and Herzegovina", "Southern Europe", &["bosnia", "herzegovina", "sarajevo"]),
    ("Bulgaria", "Eastern Europe", &["bulgaria", "българия", "sofia"]),
    ("Croatia", "Southern Europe", &["croatia", "hrvatska", "zagreb"]),
    ("Cyprus", "Southern Europe", &["cyprus", "κύπρος", "nicosia", "lefkosia", "republic of cyprus"]),
    ("Czech Republic", "Central Europe", &["czech republic", "czechia", "česko", "prague"]),
    ("Denmark", "Northern Europe", &["denmark", "danmark", "copenhagen"]),
    ("Estonia", "Northern Europe", &["estonia", "eesti", "tallinn"]),
    ("Finland", "Northern Europe", &["finland", "suomi", "helsinki"]),
    ("France", "Western Europe", &["france", "french", "paris"]),
    ("Germany", "Central Europe", &["germany", "deutschland", "berlin"]),
    ("Greece", "Southern Europe", &["greece", "ελλάδα", "athens"]),
    ("Hungary", "Central Europe", &["hungary", "magyarország", "budapest"]),
    ("Iceland", "Northern Europe", &["iceland", "ísland", "reykjavik"]),
    ("Ireland", "Northern Europe", &["ireland", "éire", "dublin"]),
    ("Italy", "Southern Europe", &["italy", "italia", "rome"]),
    ("Latvia", "Northern Europe", &["latvia", "latvija", "riga"]),
    ("Liechtenstein", "Central Europe", &["liechtenstein", "vaduz"]),
    ("Lithuania", "Northern Europe", &["lithuania", "lietuva", "vilnius"]),
    ("Luxembourg", "Western Europe", &["luxembourg", "luxemburg", "luxembourg city"]),
    ("Malta", "Southern Europe", &["malta", "valletta"]),
    ("Moldova", "Eastern Europe", &["moldova", "chișinău"]),
    ("Monaco", "Western Europe", &["monaco", "monaco-ville"]),
    ("Montenegro", "Southern Europe", &["montenegro", "crna gora", "podgorica"]),
    ("Netherlands", "Western Europe", &["netherlands", "nederland", "holland", "amsterdam"]),
    ("North Macedonia", "Southern Europe", &["north macedonia", "macedonia", "skopje"]),
    ("Norway", "Northern Europe", &["norway", "norge", "oslo"]),
    ("Poland", "Central Europe", &["poland", "polska", "warsaw"]),
    ("Portugal", "Southern Europe", &["portugal", "lisbon", "lisboa"]),
    ("Romania", "Eastern Europe", &["romania", "românia", "bucharest"]),
    ("Russia", "Eastern Europe", &["russia", "russian federation", "россия", "moscow"]),
    ("San Marino", "Southern Europe", &["san marino"]),
    ("Serbia", "Southern Europe", &["serbia", "srbija", "belgrade"]),
    ("Slovakia", "Central Europe", &["slovakia", "slovensko", "bratislava"]),
    ("Slovenia", "Southern Europe", &["slovenia", "slovenija", "ljubljana"]),
    ("Spain", "Southern Europe", &["spain", "españa", "madrid"]),
    ("Sweden", "Northern Europe", &["sweden", "sverige", "stockholm"]),
    ("Switzerland", "Central Europe", &["switzerland", "suisse", "schweiz", "svizzera", "bern"]),
    ("Ukraine", "Eastern Europe", &["ukraine", "україна", "kyiv"]),
    ("United Kingdom", "Northern Europe", &["united kingdom", "britain", "great britain", "england", "scotland", "wales", "london"]),
    ("Vatican City", "Southern Europe", &["vatican", "holy see"]),
    // North and Central America, Caribbean
    ("Canada", "North America", &["canada", "ottawa", "toronto", "ontario", "quebec"]),
    ("United States", "North America", &["united states", "u.s.", "u.s.a.", "washington dc", "new york", "california", "new mexico"]),
    ("Mexico", "North America", &["mexico", "méxico", "mexico city", "estados unidos mexicanos"]),
    ("Belize", "Central America", &["belize", "belmopan"]),
    ("Costa Rica", "Central America", &["costa rica", "san josé", "san jose"]),
    ("El Salvador", "Central America", &["el salvador", "san salvador"]),
    ("Guatemala", "Central America", &["guatemala", "guatemala city"]),
    ("Honduras", "Central America", &["honduras", "tegucigalpa"]),
    ("Nicaragua", "Central America", &["nicaragua", "managua"]),
    ("Panama", "Central America", &["panama", "panama city"]),
    ("Antigua and Barbuda", "Caribbean", &["antigua", "barbuda", "antigua and barbuda"]),
    ("Bahamas", "Caribbean", &["bahamas", "nassau"]),
    ("Barbados", "Caribbean", &["barbados", "bridgetown"]),
    ("Cuba", "Caribbean", &["cuba", "havana", "republic of cuba"]),
    ("Dominica", "Caribbean", &["dominica", "roseau", "commonwealth of dominica"]),
    ("Dominican Republic", "Caribbean", &["dominican republic", "santo domingo"]),
    ("Grenada", "Caribbean", &["grenada"]),
    ("Haiti", "Caribbean", &["haiti", "port-au-prince"]),
    ("Jamaica", "Caribbean", &["jamaica", "kingston"]),
    ("Saint Kitts and Nevis", "Caribbean", &["saint kitts", "nevis", "basseterre"]),
    ("Saint Lucia", "Caribbean", &["saint lucia", "castries"]),
    ("Saint Vincent and the Grenadines", "Caribbean", &["saint vincent", "grenadines", "kingstown"]),
    ("Trinidad and Tobago", "Caribbean", &["trinidad", "tobago", "port of spain"]),
    // South America
    ("Argentina", "South America", &["argentina", "buenos aires", "argentine republic"]),
    ("Bolivia", "South America", &["bolivia", "sucre", "la paz"]),
    ("Brazil", "South America", &["brazil", "brasil", "brasília", "brasilia", "rio de janeiro"]),
    ("Chile", "South America", &["chile", "santiago", "republic of chile"]),
    ("Colombia", "South America", &["colombia", "bogotá", "bogota"]),
    ("Ecuador", "South America", &["ecuador", "quito"]),
    ("Guyana", "South America", &["guyana", "georgetown"]),
    ("Paraguay", "South America", &["paraguay", "asunción", "asuncion"]),
    ("Peru", "South America", &["peru", "lima"]),
    ("Suriname", "South America", &["suriname", "paramaribo"]),
    ("Uruguay", "South America", &["uruguay", "montevideo"]),
    ("Venezuela", "South America", &["venezuela", "caracas"]),
    // Central Asia
    ("Kazakhstan", "Central Asia", &["kazakhstan", "nur-sultan", "astana"]),
    ("Kyrgyzstan", "Central Asia", &["kyrgyzstan", "bishkek", "kyrgyz republic"]),
    ("Tajikistan", "Central Asia", &["tajikistan", "dushanbe"]),
    ("Turkmenistan", "Central Asia", &["turkmenistan", "ashgabat"]),
    ("Uzbekistan", "Central Asia", &["uzbekistan", "tashkent"]),
    // East Asia
    ("China", "East Asia", &["china", "zhongguo", "beijing", "shanghai", "people's republic of china"]),
    ("Japan", "East Asia", &["japan", "nippon", "tokyo"]),
    ("Mongolia", "East Asia", &["mongolia", "ulaanbaatar"]),
    ("North Korea", "East Asia", &["north korea", "pyongyang"]),
    ("South Korea", "East Asia", &["south korea", "korea republic", "seoul", "republic of korea"]),
    ("Taiwan", "East Asia", &["taiwan", "taipei"]),
    // South Asia
    ("Afghanistan", "South Asia", &["afghanistan", "kabul"]),
    ("Bangladesh", "South Asia", &["bangladesh", "dhaka"]),
    ("Bhutan", "South Asia", &["bhutan", "thimphu"]),
    ("India", "South Asia", &["india", "bharat", "new delhi", "mumbai"]),
    ("Maldives", "South Asia", &["maldives", "malé"]),
    ("Nepal", "South Asia", &["nepal", "kathmandu"]),
    ("Pakistan", "South Asia", &["pakistan", "islamabad"]),
    ("Sri Lanka", "South Asia", &["sri lanka", "colombo"]),
    // Southeast Asia
    ("Brunei", "Southeast Asia", &["brunei", "bandar seri begawan"]),
    ("Cambodia", "Southeast Asia", &["cambodia", "phnom penh"]),
    ("Indonesia", "Southeast Asia", &["indonesia", "jakarta"]),
    ("Laos", "Southeast Asia", &["laos", "vientiane"]),
    ("Malaysia", "Southeast Asia", &["malaysia", "kuala lumpur", "putrajaya"]),
    ("Myanmar", "Southeast Asia", &["myanmar", "burma", "naypyidaw"]),
    ("Philippines", "Southeast Asia", &["philippines", "manila"]),
    ("Singapore", "Southeast Asia", &["singapore"]),
    ("Thailand", "Southeast Asia", &["thailand", "bangkok"]),
    ("Timor-Leste", "Southeast Asia", &["timor-leste", "east timor", "dili"]),
    ("Vietnam", "Southeast Asia", &["vietnam", "viet nam", "hanoi"]),
    // Middle East
    ("Armenia", "Middle East", &["armenia", "yerevan"]),
    ("Azerbaijan", "Middle East", &["azerbaijan", "baku"]),
    ("Bahrain", "Middle East", &["bahrain", "manama"]),
    ("Georgia", "Middle East", &["georgia", "tbilisi"]),
    ("Iran", "Middle East", &["iran", "tehran"]),
    ("Iraq", "Middle East", &["iraq", "baghdad"]),
    ("Israel", "Middle East", &["israel", "jerusalem", "state of israel"]),
    ("Jordan", "Middle East", &["jordan", "amman"]),
    ("Kuwait", "Middle East", &["kuwait", "kuwait city"]),
    ("Lebanon", "Middle East", &["lebanon", "beirut"]),
    ("Oman", "Middle East", &["oman", "muscat"]),
    ("Palestine", "Middle East", &["palestine", "ramallah", "state of palestine"]),
    ("Qatar", "Middle East", &["qatar", "doha"]),
    ("Saudi Arabia", "Middle East", &["saudi arabia", "riyadh"]),
    ("Syria", "Middle East", &["syria", "damascus"]),
    ("Turkey", "Middle East", &["turkey", "türkiye", "ankara"]),
    ("United Arab Emirates", "Middle East", &["united arab emirates", "dubai", "abu dhabi"]),
    ("Yemen", "Middle East", &["yemen", "sana'a"]),
    // Northern Africa
    ("Algeria", "Northern Africa", &["algeria", "algiers"]),
    ("Egypt", "Northern Africa", &["egypt", "cairo"]),
    ("Libya", "Northern Africa", &["libya", "tripoli"]),
    ("Morocco", "Northern Africa", &["morocco", "rabat"]),
    ("Sudan", "Northern Africa", &["sudan", "khartoum"]),
    ("Tunisia", "Northern Africa", &["tunisia", "tunis"]),
    // Western Africa
    ("Benin", "Western Africa", &["benin", "porto-novo"]),
    ("Burkina Faso", "Western Africa", &["burkina faso", "ouagadougou"]),
    ("Cape Verde", "Western Africa", &["cape verde", "cabo verde", "praia"]),
    ("Côte d'Ivoire", "Western Africa", &["côte d'ivoire", "cote d'ivoire", "ivory coast", "yamoussoukro"]),
    ("Gambia", "Western Africa", &["gambia", "banjul"]),
    ("Ghana", "Western Africa", &["ghana", "accra"]),
    ("Guinea", "Western Africa", &["guinea", "conakry"]),
    ("Guinea-Bissau", "Western Africa", &["guinea-bissau", "bissau"]),
    ("Liberia", "Western Africa", &["liberia", "monrovia"]),
    ("Mali", "Western Africa", &["mali", "bamako"]),
    ("Mauritania", "Western Africa", &["mauritania", "nouakchott"]),
    ("Niger", "Western Africa", &["niger", "niamey"]),
    ("Nigeria", "Western Africa", &["nigeria", "abuja"]),
    ("Senegal", "Western Africa", &["senegal", "dakar"]),
    ("Sierra Leone", "Western Africa", &["sierra leone", "freetown"]),
    ("Togo", "Western Africa", &["togo", "lomé"]),
    // Central Africa
    ("Angola", "Central Africa", &["angola", "luanda"]),
    ("Cameroon", "Central Africa", &["cameroon", "yaoundé"]),
    ("Central African Republic", "Central Africa", &["central african republic", "bangui"]),
    ("Chad", "Central Africa", &["chad", "n'djamena"]),
    ("Congo (Brazzaville)", "Central Africa", &["republic of the congo", "congo-brazzaville", "brazzaville"]),
    ("Congo (Kinshasa)", "Central Africa", &["democratic republic of the congo", "kinshasa"]),
    ("Equatorial Guinea", "Central Africa", &["equatorial guinea", "malabo"]),
    ("Gabon", "Central Africa", &["gabon", "libreville"]),
    ("Sao Tome and Principe", "Central Africa", &["são tomé and príncipe", "sao tome", "são tomé"]),
    // Eastern Africa
    ("Burundi", "Eastern Africa", &["burundi", "gitega"]),
    ("Comoros", "Eastern Africa", &["comoros", "moroni"]),
    ("Djibouti", "Eastern Africa", &["djibouti"]),
    ("Eritrea", "Eastern Africa", &["eritrea", "asmara"]),
    ("Ethiopia", "Eastern Africa", &["ethiopia", "addis ababa"]),
    ("Kenya", "Eastern Africa", &["kenya", "nairobi"]),
    ("Madagascar", "Eastern Africa", &["madagascar", "antananarivo"]),
    ("Malawi", "Eastern Africa", &["malawi", "lilongwe"]),
    ("Mauritius", "Eastern Africa", &["mauritius", "port louis"]),
    ("Mozambique", "Eastern Africa", &["mozambique", "maputo"]),
    ("Rwanda", "Eastern Africa", &["rwanda", "kigali"]),
    ("Seychelles", "Eastern Africa", &["seychelles"]),
    ("Somalia", "Eastern Africa", &["somalia", "mogadishu"]),
    ("South Sudan", "Eastern Africa", &["south sudan", "juba"]),
    ("Tanzania", "Eastern Africa", &["tanzania", "dodoma", "dar es salaam"]),
    ("Uganda", "Eastern Africa", &["uganda", "kampala"]),
    ("Zambia", "Eastern Africa", &["zambia", "lusaka"]),
    ("Zimbabwe", "Eastern Africa", &["zimbabwe", "harare"]),
    // Southern Africa
    ("Botswana", "Southern Africa", &["botswana", "gaborone"]),
    ("Eswatini", "Southern Africa", &["eswatini", "swaziland", "mbabane"]),
    ("Lesotho", "Southern Africa", &["lesotho", "maseru"]),
    ("Namibia", "Southern Africa", &["namibia", "windhoek"]),
    ("South Africa", "Southern Africa", &["south africa", "pretoria", "cape town", "johannesburg"]),
    // Oceania
    ("Australia", "Australia and New Zealand", &["australia", "canberra", "sydney", "melbourne", "new south wales"]),
    ("New Zealand", "Australia and New Zealand", &["new zealand", "aotearoa", "wellington"]),
    ("Fiji", "Pacific Islands", &["fiji", "suva"]),
    ("Papua New Guinea", "Pacific Islands", &["papua new guinea", "port moresby"]),
    ("Solomon Islands", "Pacific Islands", &["solomon islands", "honiara"]),
    ("Vanuatu", "Pacific Islands", &["vanuatu", "port vila"]),
    // Organisations and blocs
    ("European Union", "European Union", &["european union", "e.u.", "brussels eu"]),
    ("African Union", "African Union", &["african union"]),
    ("ASEAN", "ASEAN", &["association of southeast asian nations", "southeast asian nations"]),
    ("Global", "Global", &["world health organization", "united nations", "worldwide"]),
];

/// Short acronyms per entity. They are weak evidence: an acronym counts on
/// its own only when written in upper case, otherwise it needs a second alias
/// of the same entity in the text.
pub(crate) const ACRONYMS: &[(&str, &[&str])] = &[
    ("United Kingdom", &["UK"]),
    ("United States", &["US", "USA"]),
    ("United Arab Emirates", &["UAE"]),
    ("Congo (Kinshasa)", &["DRC"]),
    ("North Korea", &["DPRK"]),
    ("European Union", &["EU"]),
    ("African Union", &["AU"]),
    ("ASEAN", &["ASEAN"]),
    ("Global", &["WHO", "UN"]),
];

/// Country-code and second-level domain suffixes. Longer suffixes are tried first.
pub(crate) const DOMAIN_COUNTRIES: &[(&str, &str)] = &[
    (".gov.uk", "United Kingdom"),
    (".org.uk", "United Kingdom"),
    (".co.uk", "United Kingdom"),
    (".ac.uk", "United Kingdom"),
    (".nhs.uk", "United Kingdom"),
    (".gov.au", "Australia"),
    (".com.au", "Australia"),
    (".org.au", "Australia"),
    (".gc.ca", "Canada"),
    (".gob.mx", "Mexico"),
    (".gov.in", "India"),
    (".gov.br", "Brazil"),
    (".gov", "United States"),
    (".mil", "United States"),
    (".eu", "European Union"),
    (".int", "Global"),
    (".al", "Albania"),
    (".ad", "Andorra"),
    (".at", "Austria"),
    (".by", "Belarus"),
    (".be", "Belgium"),
    (".ba", "Bosnia and Herzegovina"),
    (".bg", "Bulgaria"),
    (".hr", "Croatia"),
    (".cy", "Cyprus"),
    (".cz", "Czech Republic"),
    (".dk", "Denmark"),
    (".ee", "Estonia"),
    (".fi", "Finland"),
    (".fr", "France"),
    (".de", "Germany"),
    (".gr", "Greece"),
    (".hu", "Hungary"),
    (".is", "Iceland"),
    (".ie", "Ireland"),
    (".it", "Italy"),
    (".lv", "Latvia"),
    (".li", "Liechtenstein"),
    (".lt", "Lithuania"),
    (".lu", "Luxembourg"),
    (".mt", "Malta"),
    (".md", "Moldova"),
    (".mc", "Monaco"),
    (".me", "Montenegro"),
    (".nl", "Netherlands"),
    (".mk", "North Macedonia"),
    (".no", "Norway"),
    (".pl", "Poland"),
    (".pt", "Portugal"),
    (".ro", "Romania"),
    (".ru", "Russia"),
    (".sm", "San Marino"),
    (".rs", "Serbia"),
    (".sk", "Slovakia"),
    (".si", "Slovenia"),
    (".es", "Spain"),
    (".se", "Sweden"),
    (".ch", "Switzerland"),
    (".ua", "Ukraine"),
    (".uk", "United Kingdom"),
    (".va", "Vatican City"),
    (".ca", "Canada"),
    (".us", "United States"),
    (".mx", "Mexico"),
    (".ar", "Argentina"),
    (".br", "Brazil"),
    (".cl", "Chile"),
    (".co", "Colombia"),
    (".pe", "Peru"),
    (".uy", "Uruguay"),
    (".cn", "China"),
    (".jp", "Japan"),
    (".kr", "South Korea"),
    (".tw", "Taiwan"),
    (".in", "India"),
    (".id", "Indonesia"),
    (".my", "Malaysia"),
    (".sg", "Singapore"),
    (".th", "Thailand"),
    (".vn", "Vietnam"),
    (".ph", "Philippines"),
    (".il", "Israel"),
    (".tr", "Turkey"),
    (".sa", "Saudi Arabia"),
    (".ae", "United Arab Emirates"),
    (".eg", "Egypt"),
    (".ma", "Morocco"),
    (".ng", "Nigeria"),
    (".ke", "Kenya"),
    (".za", "South Africa"),
    (".au", "Australia"),
    (".nz", "New Zealand"),
];

/// Language display name (lower case) to the country most associated with it.
pub(crate) const LANGUAGE_COUNTRIES: &[(&str, &str)] = &[
    ("dutch", "Netherlands"),
    ("german", "Germany"),
    ("french", "France"),
    ("italian", "Italy"),
    ("spanish", "Spain"),
    ("catalan", "Spain"),
    ("portuguese", "Portugal"),
    ("swedish", "Sweden"),
    ("norwegian", "Norway"),
    ("danish", "Denmark"),
    ("finnish", "Finland"),
    ("icelandic", "Iceland"),
    ("russian", "Russia"),
    ("ukrainian", "Ukraine"),
    ("polish", "Poland"),
    ("czech", "Czech Republic"),
    ("slovak", "Slovakia"),
    ("hungarian", "Hungary"),
    ("romanian", "Romania"),
    ("bulgarian", "Bulgaria"),
    ("serbian", "Serbia"),
    ("croatian", "Croatia"),
    ("slovenian", "Slovenia"),
    ("albanian", "Albania"),
    ("greek", "Greece"),
    ("turkish", "Turkey"),
    ("estonian", "Estonia"),
    ("latvian", "Latvia"),
    ("lithuanian", "Lithuania"),
    ("maltese", "Malta"),
    ("japanese", "Japan"),
    ("korean", "South Korea"),
    ("vietnamese", "Vietnam"),
    ("thai", "Thailand"),
    ("hindi", "India"),
    ("bengali", "Bangladesh"),
    ("urdu", "Pakistan"),
    ("indonesian", "Indonesia"),
    ("hebrew", "Israel"),
    ("persian", "Iran"),
    ("swahili", "Tanzania"),
    ("afrikaans", "South Africa"),
    ("somali", "Somalia"),
    ("belarusian", "Belarus"),
    ("macedonian", "North Macedonia"),
    ("georgian", "Georgia"),
    ("armenian", "Armenia"),
    ("azerbaijani", "Azerbaijan"),
    ("uzbek", "Uzbekistan"),
    ("turkmen", "Turkmenistan"),
    ("sinhala", "Sri Lanka"),
    ("khmer", "Cambodia"),
    ("burmese", "Myanmar"),
    ("amharic", "Ethiopia"),
];
