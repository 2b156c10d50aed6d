//! Bundled Python curriculum.

use crate::Error;
use crate::catalog::Catalog;
use crate::model::{
    Activity, ActivityDraft, ActivityId, ActivityKind, Difficulty, Exercise, ExerciseId, Lesson,
    LessonDraft, LessonId, QaId, QaItem, QuizQuestion,
};

use Difficulty::{Advanced, Beginner, Intermediate};

pub(super) fn catalog() -> Result<Catalog, Error> {
    let mut lessons = core_lessons()?;
    lessons.extend(topic_lessons()?);
    Ok(Catalog::new(lessons, activities()?, qa_items())?)
}

//
// ─── LESSONS ───────────────────────────────────────────────────────────────────
//

fn first_exercise() -> ExerciseId {
    ExerciseId::new(1)
}

#[allow(clippy::too_many_lines)]
fn core_lessons() -> Result<Vec<Lesson>, Error> {
    let drafts = vec![
        LessonDraft {
            id: LessonId::new(1),
            title: "Introduction to Python".into(),
            category: "Basics".into(),
            difficulty: Beginner,
            duration: "15 min".into(),
            description: "Learn what Python is and why it's popular".into(),
            content: "Python is a high-level, interpreted language designed around readable \
                      code. Indentation is part of the syntax, the standard library is large, \
                      and the same program runs on every major platform.\n\n\
                      Python is used for web services, data science, machine learning, \
                      scripting and automation."
                .into(),
            code_example: Some(
                "# Your first Python program\nprint(\"Hello, World!\")\n\n\
                 name = \"Python\"\nversion = 3.12\nprint(f\"{name} version {version}\")"
                    .into(),
            ),
            exercises: vec![Exercise::multiple_choice(
                first_exercise(),
                "What makes Python special compared to other programming languages?",
                [
                    "Complex syntax",
                    "Readability and simplicity",
                    "Only for web development",
                    "Requires compilation",
                ],
                1,
                "Python is known for its readable and simple syntax, making it beginner-friendly.",
            )?],
        },
        LessonDraft {
            id: LessonId::new(2),
            title: "Variables and Data Types".into(),
            category: "Basics".into(),
            difficulty: Beginner,
            duration: "20 min".into(),
            description: "Understanding Python's fundamental data types".into(),
            content: "A variable is a name bound to a value. The basic types are int, float, \
                      str and bool. The built-in collections are list (ordered, mutable), \
                      tuple (ordered, immutable), dict (key to value) and set (unique items)."
                .into(),
            code_example: Some(
                "age = 25            # int\nheight = 5.9        # float\nname = \"Alice\"     # str\n\
                 is_student = True   # bool\n\nnumbers = [1, 2, 3]\nperson = {\"name\": \"Bob\"}\n\
                 print(type(age))    # <class 'int'>"
                    .into(),
            ),
            exercises: vec![Exercise::multiple_choice(
                first_exercise(),
                "Which data type would you use to store a person's age?",
                ["str", "int", "list", "bool"],
                1,
                "Age is typically represented as a whole number, so 'int' is the appropriate data type.",
            )?],
        },
        LessonDraft {
            id: LessonId::new(3),
            title: "Strings and String Methods".into(),
            category: "Basics".into(),
            difficulty: Beginner,
            duration: "25 min".into(),
            description: "Working with text data in Python".into(),
            content: "Strings are sequences of characters written with single, double or \
                      triple quotes. Common methods include upper(), lower(), strip(), \
                      split(), replace() and find(); len() gives the length."
                .into(),
            code_example: Some(
                "message = \"Hello, Python World!\"\nprint(message.upper())\n\
                 print(\"  Alice  \".strip())\nprint(message.split())\n\
                 text = \"Python\"\nprint(text[0], text[-1], text[0:3])"
                    .into(),
            ),
            exercises: vec![Exercise::fill_blank(
                first_exercise(),
                "What does 'Hello World'.lower() return?",
                "hello world",
                "The lower() method converts all characters in the string to lowercase.",
            )?],
        },
        LessonDraft {
            id: LessonId::new(4),
            title: "Numbers and Mathematical Operations".into(),
            category: "Basics".into(),
            difficulty: Beginner,
            duration: "20 min".into(),
            description: "Performing calculations and working with numbers".into(),
            content: "Python supports +, -, *, / (true division), // (floor division), \
                      % (remainder) and ** (power). The math module adds functions such as \
                      sqrt() and constants such as pi."
                .into(),
            code_example: Some(
                "print(17 / 5)   # 3.4\nprint(17 // 5)  # 3\nprint(17 % 5)   # 2\nprint(2 ** 10)  # 1024\n\n\
                 import math\nprint(math.sqrt(16))"
                    .into(),
            ),
            exercises: vec![Exercise::multiple_choice(
                first_exercise(),
                "What is the result of 17 % 5 in Python?",
                ["3", "2", "3.4", "12"],
                1,
                "The modulo operator (%) returns the remainder of division. 17 ÷ 5 = 3 remainder 2.",
            )?],
        },
        LessonDraft {
            id: LessonId::new(5),
            title: "Lists and List Methods".into(),
            category: "Data Structures".into(),
            difficulty: Beginner,
            duration: "30 min".into(),
            description: "Working with ordered collections of items".into(),
            content: "Lists hold ordered, mutable sequences. append() adds to the end, \
                      insert() adds at a position, remove() deletes by value and pop() \
                      deletes by index. Slicing returns a new list."
                .into(),
            code_example: Some(
                "fruits = [\"apple\", \"banana\"]\nfruits.append(\"cherry\")\n\
                 fruits.insert(0, \"kiwi\")\nfruits.remove(\"banana\")\nprint(fruits[1:])"
                    .into(),
            ),
            exercises: vec![Exercise::multiple_choice(
                first_exercise(),
                "How do you add an item to the end of a list?",
                [".add()", ".append()", ".insert()", ".push()"],
                1,
                "The .append() method adds an item to the end of a list.",
            )?],
        },
        LessonDraft {
            id: LessonId::new(6),
            title: "Dictionaries and Key-Value Pairs".into(),
            category: "Data Structures".into(),
            difficulty: Beginner,
            duration: "25 min".into(),
            description: "Storing data in key-value pairs".into(),
            content: "Dictionaries map unique keys to values. Indexing a missing key raises \
                      KeyError; get() returns None or a default instead. keys(), values() \
                      and items() iterate the contents."
                .into(),
            code_example: Some(
                "person = {\"name\": \"Alice\", \"age\": 30}\nprint(person[\"name\"])\n\
                 print(person.get(\"email\", \"unknown\"))\nfor key, value in person.items():\n    \
                 print(key, value)"
                    .into(),
            ),
            exercises: vec![Exercise::multiple_choice(
                first_exercise(),
                "What's the safe way to get a value from a dictionary that might not exist?",
                ["dict[key]", "dict.get(key)", "dict.find(key)", "dict.search(key)"],
                1,
                "The .get() method returns None if the key doesn't exist, preventing KeyError.",
            )?],
        },
        LessonDraft {
            id: LessonId::new(7),
            title: "Conditional Statements (if, elif, else)".into(),
            category: "Control Flow".into(),
            difficulty: Beginner,
            duration: "25 min".into(),
            description: "Making decisions in your code".into(),
            content: "An if statement runs its block when the condition is true; elif adds \
                      further conditions and else catches the rest. Conditions combine with \
                      and, or and not."
                .into(),
            code_example: Some(
                "score = 85\nif score >= 90:\n    grade = \"A\"\nelif score >= 80:\n    grade = \"B\"\n\
                 else:\n    grade = \"C\"\nprint(grade)"
                    .into(),
            ),
            exercises: vec![Exercise::multiple_choice(
                first_exercise(),
                "What will be printed if x = 5? if x > 3 and x < 10: print('Yes')",
                ["Yes", "No", "Nothing", "Error"],
                0,
                "Since 5 > 3 and 5 < 10, both conditions are True, so 'Yes' is printed.",
            )?],
        },
        LessonDraft {
            id: LessonId::new(8),
            title: "Loops - For and While".into(),
            category: "Control Flow".into(),
            difficulty: Beginner,
            duration: "30 min".into(),
            description: "Repeating code execution with loops".into(),
            content: "for iterates over any iterable; while repeats as long as its condition \
                      holds. break leaves the loop early and continue skips to the next \
                      iteration. range() produces integer sequences."
                .into(),
            code_example: Some(
                "for i in range(1, 6):\n    if i == 3:\n        continue\n    print(i)\n\n\
                 count = 0\nwhile count < 3:\n    count += 1"
                    .into(),
            ),
            exercises: vec![Exercise::multiple_choice(
                first_exercise(),
                "What does 'continue' do in a loop?",
                [
                    "Exits the loop",
                    "Skips to next iteration",
                    "Restarts the loop",
                    "Pauses the loop",
                ],
                1,
                "The 'continue' statement skips the rest of the current iteration and moves to the next one.",
            )?],
        },
        LessonDraft {
            id: LessonId::new(9),
            title: "Functions - Defining and Calling".into(),
            category: "Functions".into(),
            difficulty: Beginner,
            duration: "35 min".into(),
            description: "Creating reusable blocks of code".into(),
            content: "Functions are defined with def, take parameters and hand a result back \
                      with return. A function without return yields None. Docstrings \
                      document what a function does."
                .into(),
            code_example: Some(
                "def greet(name):\n    \"\"\"Return a greeting.\"\"\"\n    return f\"Hello, {name}!\"\n\n\
                 print(greet(\"Alice\"))"
                    .into(),
            ),
            exercises: vec![Exercise::fill_blank(
                first_exercise(),
                "What keyword is used to define a function in Python?",
                "def",
                "The 'def' keyword is used to define functions in Python.",
            )?],
        },
        LessonDraft {
            id: LessonId::new(10),
            title: "Function Parameters and Arguments".into(),
            category: "Functions".into(),
            difficulty: Intermediate,
            duration: "30 min".into(),
            description: "Advanced function parameter handling".into(),
            content: "Parameters can have default values and be passed by keyword. *args \
                      collects extra positional arguments into a tuple and **kwargs collects \
                      extra keyword arguments into a dict."
                .into(),
            code_example: Some(
                "def total(*args):\n    return sum(args)\n\ndef profile(**kwargs):\n    \
                 return kwargs\n\nprint(total(1, 2, 3))\nprint(profile(name=\"Bob\", age=30))"
                    .into(),
            ),
            exercises: vec![Exercise::multiple_choice(
                first_exercise(),
                "What does *args allow you to do in a function?",
                [
                    "Accept keyword arguments",
                    "Accept variable number of positional arguments",
                    "Set default values",
                    "Create lambda functions",
                ],
                1,
                "*args allows a function to accept any number of positional arguments as a tuple.",
            )?],
        },
    ];

    Ok(drafts
        .into_iter()
        .map(LessonDraft::validate)
        .collect::<Result<_, _>>()?)
}

/// Topic outlines rendered through a shared lesson template.
const TOPICS: [(&str, &str, Difficulty, &str); 25] = [
    ("Object-Oriented Programming - Classes", "OOP", Intermediate, "Introduction to classes and objects"),
    ("Inheritance and Polymorphism", "OOP", Intermediate, "Advanced OOP concepts"),
    ("File Handling and I/O Operations", "File Operations", Intermediate, "Reading and writing files"),
    ("Exception Handling", "Error Handling", Intermediate, "Managing errors gracefully"),
    ("Modules and Packages", "Code Organization", Intermediate, "Organizing code into modules"),
    ("Regular Expressions", "Text Processing", Intermediate, "Pattern matching with regex"),
    ("Working with APIs", "Web Development", Intermediate, "Making HTTP requests"),
    ("Database Operations with SQLite", "Database", Intermediate, "Storing and retrieving data"),
    ("Web Scraping with BeautifulSoup", "Web Development", Advanced, "Extracting data from websites"),
    ("Data Analysis with Pandas", "Data Science", Advanced, "Analyzing data with pandas"),
    ("Data Visualization with Matplotlib", "Data Science", Advanced, "Creating charts and graphs"),
    ("Machine Learning Introduction", "AI/ML", Advanced, "Basic ML concepts"),
    ("Building REST APIs with Flask", "Web Development", Advanced, "Creating web APIs"),
    ("Testing Your Python Code", "Testing", Intermediate, "Unit testing and debugging"),
    ("Decorators and Metaclasses", "Advanced Python", Advanced, "Advanced Python features"),
    ("Async Programming with asyncio", "Advanced Python", Advanced, "Asynchronous programming"),
    ("Working with JSON and XML", "Data Formats", Intermediate, "Parsing structured data"),
    ("Command Line Applications", "CLI Development", Intermediate, "Building CLI tools"),
    ("Virtual Environments and Package Management", "Development Environment", Intermediate, "Managing project dependencies"),
    ("Python Performance Optimization", "Performance", Advanced, "Making Python code faster"),
    ("GUI Development with Tkinter", "GUI Development", Intermediate, "Creating desktop applications"),
    ("Working with Dates and Times", "Standard Library", Beginner, "Date and time manipulation"),
    ("Logging and Debugging", "Development Tools", Intermediate, "Monitoring and debugging code"),
    ("Memory Management and Garbage Collection", "Advanced Python", Advanced, "Understanding Python's memory model"),
    ("Design Patterns in Python", "Software Design", Advanced, "Common programming patterns"),
];

const FIRST_TOPIC_ID: u32 = 11;

fn topic_lessons() -> Result<Vec<Lesson>, Error> {
    let mut lessons = Vec::with_capacity(TOPICS.len());
    for (id, (title, category, difficulty, description)) in (FIRST_TOPIC_ID..).zip(TOPICS) {
        let exercise = Exercise::multiple_choice(
            first_exercise(),
            format!("What is the main purpose of {title}?"),
            ["Option A", "Option B", "Option C", "Option D"],
            0,
            format!("{title} is used for {}.", description.to_lowercase()),
        )?;
        let lesson = LessonDraft {
            id: LessonId::new(id),
            title: title.into(),
            category: category.into(),
            difficulty,
            duration: "30 min".into(),
            description: description.into(),
            content: format!(
                "This is an advanced lesson on {title}. Content would include detailed \
                 explanations, examples, and practical applications."
            ),
            code_example: Some(format!(
                "# Example code for {title}\nprint(\"Advanced Python concept\")"
            )),
            exercises: vec![exercise],
        }
        .validate()?;
        lessons.push(lesson);
    }
    Ok(lessons)
}

//
// ─── ACTIVITIES ────────────────────────────────────────────────────────────────
//

#[allow(clippy::too_many_lines)]
fn activities() -> Result<Vec<Activity>, Error> {
    let drafts = vec![
        ActivityDraft {
            id: ActivityId::new(1),
            title: "Hello World Challenge".into(),
            description: "Write your first Python program that prints 'Hello, World!' to the console."
                .into(),
            kind: ActivityKind::Coding,
            difficulty: Beginner,
            points: 10,
            time_limit_secs: None,
            starter_code: Some("# Write your code here\n".into()),
            expected_output: Some("Hello, World!".into()),
        },
        ActivityDraft {
            id: ActivityId::new(2),
            title: "Variable Basics Quiz".into(),
            description: "Test your knowledge of Python variables and data types.".into(),
            kind: ActivityKind::Quiz {
                questions: vec![
                    QuizQuestion::new(
                        "Which of these is a valid variable name?",
                        ["2name", "name2", "name-2", "name 2"],
                        1,
                    ),
                    QuizQuestion::new(
                        "What type is the value 3.14?",
                        ["int", "float", "str", "bool"],
                        1,
                    ),
                ],
            },
            difficulty: Beginner,
            points: 15,
            time_limit_secs: None,
            starter_code: None,
            expected_output: None,
        },
        ActivityDraft {
            id: ActivityId::new(3),
            title: "List Operations".into(),
            description: "Create a list of numbers and perform various operations on it.".into(),
            kind: ActivityKind::Coding,
            difficulty: Beginner,
            points: 20,
            time_limit_secs: None,
            starter_code: Some(
                "# Create a list of numbers from 1 to 5\n# Add the number 6 to the list\n\
                 # Remove the number 3 from the list\n# Print the final list\n"
                    .into(),
            ),
            expected_output: Some("[1, 2, 4, 5, 6]".into()),
        },
        ActivityDraft {
            id: ActivityId::new(4),
            title: "Debug the Loop".into(),
            description: "Find and fix the bugs in this Python loop code.".into(),
            kind: ActivityKind::Debugging,
            difficulty: Intermediate,
            points: 25,
            time_limit_secs: None,
            starter_code: Some(
                "# This code should print numbers 1 to 5, but it has bugs\n\
                 for i in range(0, 5):\n    print(i)\n# Fix the bugs to make it work correctly"
                    .into(),
            ),
            expected_output: Some("1\n2\n3\n4\n5".into()),
        },
        ActivityDraft {
            id: ActivityId::new(5),
            title: "Function Fundamentals".into(),
            description: "Write a function that calculates the area of a rectangle.".into(),
            kind: ActivityKind::Coding,
            difficulty: Intermediate,
            points: 30,
            time_limit_secs: None,
            starter_code: Some(
                "# Write a function called 'rectangle_area' that takes length and width as parameters\n\
                 # and returns the area (length * width)\n\n\
                 # Test your function with length=5 and width=3\n"
                    .into(),
            ),
            expected_output: Some("15".into()),
        },
        ActivityDraft {
            id: ActivityId::new(6),
            title: "Python Concepts Quiz".into(),
            description: "Advanced quiz covering functions, loops, and data structures.".into(),
            kind: ActivityKind::Quiz {
                questions: vec![
                    QuizQuestion::new(
                        "What does the 'yield' keyword do in Python?",
                        [
                            "Returns a value and ends the function",
                            "Creates a generator",
                            "Imports a module",
                            "Defines a variable",
                        ],
                        1,
                    ),
                    QuizQuestion::new(
                        "Which method adds an element to the end of a list?",
                        ["add()", "append()", "push()", "insert()"],
                        1,
                    ),
                    QuizQuestion::new(
                        "What is the output of: print([1, 2, 3] * 2)?",
                        ["[2, 4, 6]", "[1, 2, 3, 1, 2, 3]", "[1, 2, 3, 2]", "Error"],
                        1,
                    ),
                ],
            },
            difficulty: Advanced,
            points: 35,
            time_limit_secs: Some(300),
            starter_code: None,
            expected_output: None,
        },
        ActivityDraft {
            id: ActivityId::new(7),
            title: "Build a Calculator".into(),
            description: "Create a simple calculator that can perform basic arithmetic operations."
                .into(),
            kind: ActivityKind::Project,
            difficulty: Intermediate,
            points: 50,
            time_limit_secs: None,
            starter_code: Some(
                "# Build a calculator that can add, subtract, multiply, and divide\n\
                 # Create functions for each operation\n\n\
                 def add(a, b):\n    # Your code here\n    pass\n\n\
                 def subtract(a, b):\n    # Your code here\n    pass\n\n\
                 # Continue with multiply and divide functions\n"
                    .into(),
            ),
            expected_output: Some("Calculator with working operations".into()),
        },
        ActivityDraft {
            id: ActivityId::new(8),
            title: "String Manipulation Challenge".into(),
            description: "Master string operations with this comprehensive challenge.".into(),
            kind: ActivityKind::Coding,
            difficulty: Advanced,
            points: 40,
            time_limit_secs: None,
            starter_code: Some(
                "# Given a string, write code to:\n# 1. Count the number of vowels\n\
                 # 2. Reverse the string\n# 3. Check if it's a palindrome\n\
                 # 4. Convert to title case\n\ntext = \"python programming\"\n# Your code here\n"
                    .into(),
            ),
            expected_output: Some(
                "Vowels: 5, Reversed: gnimargorp nohtyp, Palindrome: False, Title: Python Programming"
                    .into(),
            ),
        },
    ];

    Ok(drafts
        .into_iter()
        .map(ActivityDraft::validate)
        .collect::<Result<_, _>>()?)
}

//
// ─── Q&A ───────────────────────────────────────────────────────────────────────
//

#[allow(clippy::too_many_lines)]
fn qa_items() -> Vec<QaItem> {
    let entries: [(&str, &str, &str, Difficulty, &[&str]); 25] = [
        (
            "What is Python?",
            "Python is a high-level, interpreted programming language known for its simple and \
             readable syntax. It was created by Guido van Rossum and first released in 1991.",
            "Basics",
            Beginner,
            &["python", "introduction", "basics"],
        ),
        (
            "What are Python's main features?",
            "Easy to learn, interpreted, cross-platform, a large standard library, support for \
             several programming paradigms, dynamic typing, automatic memory management and a \
             large ecosystem.",
            "Basics",
            Beginner,
            &["features", "overview"],
        ),
        (
            "What is the difference between a list and a tuple?",
            "Lists are mutable and use square brackets []. Tuples are immutable and use \
             parentheses (). Use lists for collections that change and tuples for fixed data \
             such as coordinates.",
            "Data Structures",
            Beginner,
            &["list", "tuple", "data-structures"],
        ),
        (
            "How do you handle errors in Python?",
            "Wrap code that might raise in a try block and handle the exception in an except \
             block. finally runs cleanup code and else runs when no exception occurred.",
            "Error Handling",
            Intermediate,
            &["exceptions", "error-handling", "try-except"],
        ),
        (
            "What is a lambda function?",
            "A small anonymous function with any number of arguments and a single expression, \
             written with the lambda keyword, e.g. lambda x: x * 2. Often passed to map(), \
             filter() and sort().",
            "Functions",
            Intermediate,
            &["lambda", "functions", "anonymous"],
        ),
        (
            "What is the difference between '==' and 'is' in Python?",
            "'==' compares values while 'is' compares identity. Use 'is' for None, True and \
             False.",
            "Operators",
            Intermediate,
            &["comparison", "operators", "identity"],
        ),
        (
            "What is list comprehension?",
            "A concise way to build a list from an expression followed by for and optional if \
             clauses, e.g. [x**2 for x in range(10) if x % 2 == 0].",
            "Data Structures",
            Intermediate,
            &["list-comprehension", "lists", "syntax"],
        ),
        (
            "What are Python decorators?",
            "Functions that take a function or class and return a modified version, applied \
             with @name syntax. Common built-in examples are @property, @staticmethod and \
             @classmethod.",
            "Advanced Python",
            Advanced,
            &["decorators", "functions", "advanced"],
        ),
        (
            "What is the difference between append() and extend()?",
            "append() adds a single element to the end of a list; extend() adds every element \
             of an iterable. append([1,2]) adds one nested list while extend([1,2]) adds 1 and 2.",
            "Data Structures",
            Beginner,
            &["lists", "methods", "append", "extend"],
        ),
        (
            "What is PEP 8?",
            "The style guide for Python code: naming conventions, indentation, line length and \
             other formatting rules that keep code readable.",
            "Best Practices",
            Beginner,
            &["pep8", "style", "best-practices"],
        ),
        (
            "What are *args and **kwargs?",
            "*args gathers extra positional arguments into a tuple; **kwargs gathers extra \
             keyword arguments into a dictionary.",
            "Functions",
            Intermediate,
            &["args", "kwargs", "functions", "parameters"],
        ),
        (
            "What is the Global Interpreter Lock (GIL)?",
            "A mutex that lets only one thread execute Python bytecode at a time, which limits \
             multi-threaded performance for CPU-bound work.",
            "Advanced Python",
            Advanced,
            &["gil", "threading", "performance"],
        ),
        (
            "What are Python generators?",
            "Functions that produce values lazily with yield instead of return, so large \
             sequences never have to be held in memory at once.",
            "Advanced Python",
            Advanced,
            &["generators", "yield", "iteration"],
        ),
        (
            "What is the difference between deep copy and shallow copy?",
            "A shallow copy shares nested objects with the original; a deep copy duplicates \
             them recursively. Use copy.copy() and copy.deepcopy() respectively.",
            "Memory Management",
            Intermediate,
            &["copy", "memory", "objects"],
        ),
        (
            "What are Python modules?",
            "Files of Python code that other programs bring in with import. The standard \
             library ships a large set of them.",
            "Code Organization",
            Beginner,
            &["modules", "import", "organization"],
        ),
        (
            "What is the difference between remove(), del, and pop()?",
            "remove() deletes the first matching value, del deletes by index and pop() deletes \
             and returns an item (the last one when no index is given).",
            "Data Structures",
            Beginner,
            &["lists", "removal", "methods"],
        ),
        (
            "What are Python context managers?",
            "Objects used with the with statement that handle setup and cleanup automatically, \
             as in 'with open(file) as f:'.",
            "Advanced Python",
            Intermediate,
            &["context-managers", "with-statement", "resources"],
        ),
        (
            "What is the difference between Python 2 and Python 3?",
            "Python 3 made print a function, made / return a float and made strings Unicode by \
             default. Python 2 reached end-of-life in 2020.",
            "Python Versions",
            Beginner,
            &["python2", "python3", "versions"],
        ),
        (
            "What is monkey patching?",
            "Changing a class or module at runtime to alter behaviour without editing its \
             source. Powerful, but it makes code harder to follow.",
            "Advanced Python",
            Advanced,
            &["monkey-patching", "dynamic", "modification"],
        ),
        (
            "What are Python metaclasses?",
            "Classes whose instances are classes. The default metaclass is type; custom ones \
             are mostly found in frameworks.",
            "Advanced Python",
            Advanced,
            &["metaclasses", "classes", "advanced"],
        ),
        (
            "How do you optimize Python code performance?",
            "Prefer built-ins and comprehensions, keep hot variables local, cache results, use \
             generators for large data, profile before optimising and reach for NumPy for \
             numeric work.",
            "Performance",
            Advanced,
            &["optimization", "performance", "efficiency"],
        ),
        (
            "What is the difference between __str__ and __repr__?",
            "__str__ is a readable representation for end users; __repr__ is an unambiguous one \
             for developers, ideally valid code that recreates the object.",
            "Object-Oriented Programming",
            Intermediate,
            &["dunder-methods", "string-representation", "oop"],
        ),
        (
            "What are Python virtual environments?",
            "Isolated interpreters with their own installed packages, created with venv, \
             virtualenv or conda, so projects do not interfere with each other.",
            "Development Environment",
            Intermediate,
            &["virtual-environments", "packages", "isolation"],
        ),
        (
            "What is the difference between staticmethod and classmethod?",
            "@staticmethod receives no implicit argument; @classmethod receives the class as \
             cls and is often used for alternative constructors.",
            "Object-Oriented Programming",
            Intermediate,
            &["staticmethod", "classmethod", "decorators", "oop"],
        ),
        (
            "What is duck typing in Python?",
            "An object's suitability is decided by the methods and attributes it has rather \
             than its declared type: if it walks like a duck and quacks like a duck, it is a \
             duck.",
            "Type System",
            Intermediate,
            &["duck-typing", "polymorphism", "types"],
        ),
    ];

    (1..)
        .zip(entries)
        .map(|(id, (question, answer, category, difficulty, tags))| {
            QaItem::new(
                QaId::new(id),
                question,
                answer,
                category,
                difficulty,
                tags.iter().copied(),
            )
        })
        .collect()
}
