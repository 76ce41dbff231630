//! Prompt builders for the generation tasks.

use chrono::{DateTime, SecondsFormat, Utc};
use vetrina_core::{Platform, Post, VideoMetadata};

fn platform_list(platforms: &[Platform]) -> String {
    platforms
        .iter()
        .map(Platform::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn infer_metadata(file_name: &str) -> String {
    format!(
        "Based on the video filename \"{file_name}\", generate a catchy title, a short \
         description (2-3 sentences), 5 relevant tags, and suggest the most fitting content type. \
         Choose the content type from a comprehensive list like: 'DIY Tutorial', 'Tech Review', \
         'Comedy Skit', 'Travel Vlog', 'Gaming Walkthrough', 'Educational Explainer', \
         'Unboxing Video', 'Music Cover', 'Fitness Routine', 'Cooking Recipe'. \
         Return a single JSON object with keys \"title\", \"description\", \"tags\" (an array of \
         strings), and \"contentType\"."
    )
}

pub fn content_and_suggestions(metadata: &VideoMetadata, platforms: &[Platform]) -> String {
    format!(
        "Based on the video information below, perform two tasks:\n\
         Video Title: \"{title}\"\n\
         Video Description: \"{description}\"\n\
         Video Tags: {tags}\n\
         Content Type: {content_type}\n\n\
         TASK 1: Create tailored content for platforms: {platforms}. For each platform, provide \
         a title, description/caption, and 3-5 relevant hashtags. Keep in mind the style and \
         audience of each platform.\n\n\
         TASK 2: Provide detailed editing suggestions for a 60-second video. The suggestions \
         should include:\n\
         1. \"general\": An array of 2 actionable suggestions.\n\
         2. \"trimming\": An object with \"startTime\", \"endTime\", and \"reason\". Suggest an \
         engaging clip between 15-30 seconds. Can be null.\n\
         3. \"overlays\": An array of exactly 2 objects, each with \"text\", \"timestamp\", \
         \"style\" ('Title' or 'Call-to-Action'), \"position\" (e.g., 'bottom-center'), and \
         \"animation\" ('fade-in' or 'slide-up').\n\
         4. \"filter\": An object with \"name\" from ['Vibrant', 'Cinematic', 'Vintage', \
         'Black & White'] and a \"reason\". Can be null.\n\
         5. \"transition\": An object with a \"type\" from ['cross-fade', 'zoom-in'], a \
         \"timestamp\", and a \"reason\". Can be null.\n\
         6. \"visualEffect\": An object with a \"type\" from ['glitch', 'slow-motion'], a \
         \"timestamp\", a \"duration\", and a \"reason\". Can be null.\n\n\
         Return a single JSON object with two top-level keys: \"platformContent\" and \
         \"editingSuggestions\", matching the structures described in Task 1 and Task 2.",
        title = metadata.title(),
        description = metadata.description(),
        tags = metadata.tags().join(", "),
        content_type = metadata.content_type(),
        platforms = platform_list(platforms),
    )
}

pub fn expand_idea(idea: &str, platforms: &[Platform]) -> String {
    format!(
        "Video Idea: \"{idea}\"\n\n\
         Part 1: Flesh out this idea. Generate a video title, a short description (2-3 \
         sentences), 5 relevant tags, and suggest a content type from this list: [\"Tutorial\", \
         \"Vlog\", \"Short Skit\", \"Product Review\", \"Gaming\", \"News\", \"Music Video\"].\n\n\
         Part 2: Based on the fleshed-out idea, create tailored content for the following \
         platforms: {platforms}. For each platform, provide a suitable title, a \
         description/caption, and 3-5 relevant hashtags.\n\n\
         Part 3: Provide detailed editing suggestions for a 60-second video based on this idea. \
         The suggestions should include: \"general\" (2 suggestions), \"trimming\" (can be null), \
         \"overlays\" (2 overlays), \"filter\" (can be null), \"transition\" (can be null), and \
         \"visualEffect\" (can be null).\n\n\
         Return a single JSON object with three top-level keys:\n\
         1. \"videoMetadata\": an object with \"title\", \"description\", \"tags\", and \
         \"contentType\".\n\
         2. \"platformContent\": an object where each key is a platform name and the value is an \
         object with \"title\", \"description\", and \"hashtags\".\n\
         3. \"editingSuggestions\": an object matching the structure from Part 3.",
        platforms = platform_list(platforms),
    )
}

pub fn post_times(platforms: &[Platform], content_type: &str, now: DateTime<Utc>) -> String {
    format!(
        "You are an expert social media strategist. For a \"{content_type}\" video, what is the \
         absolute best time to post on each of the following platforms in the upcoming week for \
         maximum engagement: {platforms}? Base your decision on the current date being {now}. \
         Respond with a single JSON object where each key is a platform name and the value is an \
         object with a single key \"bestTimeISO\". The value for \"bestTimeISO\" must be a future \
         date and time in ISO 8601 format (e.g., \"YYYY-MM-DDTHH:mm:ss.sssZ\").",
        platforms = platform_list(platforms),
        now = now.to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}

pub fn comments(title: &str, description: &str) -> String {
    format!(
        "A video titled \"{title}\" with description \"{description}\" has been posted. Generate \
         5 realistic comments for this video. For each comment, provide the author's username, \
         the comment text, and a sentiment analysis ('positive', 'neutral', 'negative'). Vary \
         the sentiments. For any comments with a 'positive' sentiment, ALSO generate a friendly \
         and appreciative suggested reply (1-2 sentences). Return a single JSON object with a \
         \"comments\" key, which is an array of objects. Each object must have \"author\", \
         \"comment\", and \"sentiment\" keys. For positive comments, it should also include an \
         \"autoReply\" key."
    )
}

pub fn analytics(post: &Post) -> String {
    format!(
        "A video titled \"{title}\" was posted on {platform}. The description was: \
         \"{description}\". The hashtags were: {hashtags}. Based on this information, generate \
         realistic but impressive performance analytics for this post after 1 week. Consider the \
         platform's typical engagement patterns. For example, YouTube might have high views but \
         lower shares, while TikTok might have high shares and likes. Return a single JSON \
         object with the keys \"views\", \"likes\", \"shares\", and \"comments\". All values \
         must be numbers.",
        title = post.title(),
        platform = post.platform(),
        description = post.description(),
        hashtags = post.hashtags().join(", "),
    )
}
