pub const FLASHCARD_SYSTEM_PROMPT: &str = "You are a flashcard generator. You must always respond with valid JSON array only. Never use markdown code blocks or any formatting. Just pure JSON.";

pub const QUIZ_SYSTEM_PROMPT: &str = "You are a quiz generator. You must always respond with valid JSON array only. Never use markdown code blocks or any formatting. Just pure JSON.";

pub const FLASHCARD_REQUIREMENTS: &str = "Requirements:
- Front: A clear, concise question or term (keep it short, under 100 characters)
- Back: A comprehensive answer or definition (can be 1-3 sentences)
- Cover the most important concepts from the text
- Vary types: definitions, explanations, comparisons, applications, examples
- Make them useful for studying and memorization
- Each flashcard should focus on ONE key concept";

pub const FLASHCARD_EXAMPLE: &str = r#"[
  {
    "front": "What is OOP?",
    "back": "Object-Oriented Programming is a programming paradigm that organizes code around objects containing data and methods."
  }
]"#;

pub const QUIZ_REQUIREMENTS: &str = "Requirements:
- Each question must have exactly 4 options labeled A, B, C, D
- Only ONE correct answer per question
- Include a brief explanation for each correct answer
- Questions should test understanding, not just memorization
- Vary question types (definition, application, comparison, analysis)
- Make questions clear and unambiguous";

pub const QUIZ_EXAMPLE: &str = r#"[
  {
    "question": "Question text here?",
    "options": ["A) First option", "B) Second option", "C) Third option", "D) Fourth option"],
    "correctAnswer": "A",
    "explanation": "Brief explanation why this is correct"
  }
]"#;

pub const JSON_ONLY_INSTRUCTION: &str = "IMPORTANT: Return ONLY a valid JSON array with this exact structure. Do not include any markdown formatting, code blocks, or extra text:";

pub const SUMMARY_REQUIREMENTS: &str = "Requirements:
- Include ALL major concepts and key points
- Provide explanations for technical terms
- Keep important examples and comparisons
- Organize into clear sections with headings
- Aim for 30-40% of original length (NOT just bullet points)
- Use paragraphs, not just short bullet points
- Maintain the educational value of the content";
